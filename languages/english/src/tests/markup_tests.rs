use crate::markup::{BlockNodes, attribute, decode_entities, find_tagged_attribute, text_content};

#[test]
fn test_nested_blocks_outer_first() {
    let texts: Vec<String> = BlockNodes::new("<div>a<div>b</div></div><div>c</div>")
        .map(|node| node.text())
        .collect();
    assert_eq!(texts, vec!["ab", "b", "c"]);
}

#[test]
fn test_unterminated_block_runs_to_end() {
    let nodes: Vec<_> = BlockNodes::new("x <div style=''>tail text").collect();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].text(), "tail text");
}

#[test]
fn test_div_prefix_tags_are_not_blocks() {
    let count = BlockNodes::new("<divider>x</divider><DIV>y</DIV>").count();
    assert_eq!(count, 1);
}

#[test]
fn test_line_break_detection() {
    for inner in ["<br>", "<br />", "<BR/>", " <br> ", ""] {
        let html = format!("<div>{}</div>", inner);
        let node = BlockNodes::new(&html).next().unwrap();
        assert!(node.is_line_break(), "{:?} should be a break", inner);
    }

    let html = "<div><br /><div>nested</div></div>";
    assert!(!BlockNodes::new(html).next().unwrap().is_line_break());
}

#[test]
fn test_color_marker_case_insensitive() {
    let node = BlockNodes::new("<div style='font-weight:bold; color: RosyBrown'>N</div>")
        .next()
        .unwrap();
    assert!(node.has_color("rosybrown"));
    assert!(!node.has_color("orangered"));
}

#[test]
fn test_attribute_quoting() {
    assert_eq!(attribute(r#" class="a b" id=x"#, "id"), Some("x".to_string()));
    assert_eq!(attribute(" style=''", "style"), Some(String::new()));
    assert_eq!(attribute(" title='a &amp; b'", "title"), Some("a & b".to_string()));
    assert_eq!(attribute(" style=''", "class"), None);
}

#[test]
fn test_tagged_attribute() {
    let html = "<meta charset='UTF-8'>\n<span class='word-audio audio' data-src='x.mp3'></span>";
    assert_eq!(
        find_tagged_attribute(html, "word-audio", "data-src"),
        Some("x.mp3".to_string())
    );
    assert_eq!(find_tagged_attribute(html, "audio-player", "data-src"), None);
    assert_eq!(
        find_tagged_attribute("<span class='word-audio'></span>", "word-audio", "data-src"),
        None
    );
}

#[test]
fn test_text_content_and_entities() {
    assert_eq!(text_content("<b>例：</b>A &lt;b&gt; c"), "例：A <b> c");
    assert_eq!(decode_entities("&#39;x&#x41;&bogus;"), "'xA&bogus;");
    assert_eq!(decode_entities("fish & chips"), "fish & chips");
}
