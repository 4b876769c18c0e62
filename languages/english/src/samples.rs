//! Dictionary pages bundled with the binary so the first corpus words render
//! without any content source configured.

const SAMPLES: &[(&str, &str)] = &[
    (
        "coca_00002_be.html",
        include_str!("../data/samples/coca_00002_be.html"),
    ),
    (
        "coca_00003_and.html",
        include_str!("../data/samples/coca_00003_and.html"),
    ),
    (
        "coca_00004_of.html",
        include_str!("../data/samples/coca_00004_of.html"),
    ),
    (
        "coca_00005_a.html",
        include_str!("../data/samples/coca_00005_a.html"),
    ),
    (
        "coca_00006_in.html",
        include_str!("../data/samples/coca_00006_in.html"),
    ),
];

/// Bundled markup for `html_ref`, if any
pub fn sample(html_ref: &str) -> Option<&'static str> {
    SAMPLES
        .iter()
        .find(|(key, _)| *key == html_ref)
        .map(|(_, html)| *html)
}

/// Every bundled `(html_ref, markup)` pair, in corpus order
pub fn all() -> &'static [(&'static str, &'static str)] {
    SAMPLES
}
