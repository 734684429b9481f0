pub const BLOCK_TEMPLATE: &str =
    "<div class=box><span>hello</span><img src=x><!-- note --><a href='/?q=<b>'>go</a></div>";

/// Start tags per [`BLOCK_TEMPLATE`]: div, span, img, a.
pub const TAGS_PER_BLOCK: usize = 4;

pub fn make_blocks(blocks: usize) -> String {
    let mut html = String::with_capacity(BLOCK_TEMPLATE.len() * blocks);
    for _ in 0..blocks {
        html.push_str(BLOCK_TEMPLATE);
    }
    html
}

pub fn make_rawtext_adversarial(bytes: usize) -> String {
    let mut body = String::with_capacity(bytes + 32);
    body.push_str("<script>");
    while body.len() < bytes {
        body.push_str("</scri");
        body.push('<');
        body.push_str("pt");
    }
    body.push_str("</script>");
    body
}
