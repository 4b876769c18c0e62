mod preprocess_tests;
mod selection_tests;

use crate::corpus::CorpusIndex;

/// Small corpus: sentinel at rank 0, then words in frequency order
pub(crate) fn sample_index() -> CorpusIndex {
    CorpusIndex::from_pairs([
        ("", ""),
        ("the", "coca_00001_the.html"),
        ("be", "coca_00002_be.html"),
        ("grab", "coca_00003_grab.html"),
        ("about", "coca_00004_about.html"),
        ("able", "coca_00005_able.html"),
        ("", "coca_00006_.html"),
        ("abandon", "coca_00007_abandon.html"),
        ("Absolute", "coca_00008_absolute.html"),
        ("crab", "coca_00009_crab.html"),
    ])
}

/// `len` synthetic words, sentinel included
pub(crate) fn synthetic_index(len: usize) -> CorpusIndex {
    CorpusIndex::from_pairs((0..len).map(|rank| {
        if rank == 0 {
            (String::new(), String::new())
        } else {
            (format!("w{rank}"), format!("coca_{rank:05}_w{rank}.html"))
        }
    }))
}
