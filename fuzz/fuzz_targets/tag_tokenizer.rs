#![no_main]

use html::{TagStream, Tokenizer, tokenize};
use libfuzzer_sys::fuzz_target;
use stats::{FrequencyTable, top_k, total_count};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let stream = tokenize(&input);

    assert_eq!(stream, Tokenizer::new(&input).collect::<TagStream>());
    assert!(total_count(&stream) <= input.len() / 2);
    for name in &stream {
        let first = name.as_str().as_bytes()[0];
        assert!(first.is_ascii_lowercase(), "tag name must start with a letter: {name}");
    }

    let table = FrequencyTable::from_stream(&stream);
    assert_eq!(table.total(), total_count(&stream));
    for k in [0, 1, 5, table.len() + 1] {
        let ranked = top_k(&stream, k);
        assert_eq!(ranked.len(), k.min(table.len()));
        assert!(ranked.as_slice().windows(2).all(|w| w[0].count >= w[1].count));
    }
});
