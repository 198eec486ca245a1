use std::fs;

use burn::backend::NdArray;
use burn::data::dataset::Dataset;
use window_lm_data::{
    build_loader, build_split, DataLoaderConfig, TextCorpus, WindowedCorpusDataset, EOS_ID,
    UNK_ID,
};

#[test]
fn small_corpus_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("train.txt"), "a b a c\na b\n").unwrap();

    let cfg = DataLoaderConfig {
        data_dir:       dir.path().display().to_string(),
        window_length:  3,
        batch_size:     1,
        min_word_count: 1,
        ..DataLoaderConfig::default()
    };

    let split = build_split(&cfg, "train", None).unwrap();
    let vocab = split.vocab.unwrap();

    // <unk> <eos> a b c
    assert!(vocab.size() >= 4);
    assert_eq!(vocab.id("<unk>"), UNK_ID);
    assert_eq!(vocab.id("<eos>"), EOS_ID);
    assert_ne!(vocab.id("c"), UNK_ID);

    let pair = split.dataset.get(0).unwrap();
    assert_eq!(pair.src.len(), 3);
    assert_eq!(pair.src[1..], pair.tgt[..2]);

    let loader = build_loader::<NdArray>(split.dataset, &cfg, Default::default());
    let batches: Vec<_> = loader.iter().collect();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].src.dims(), [1, 3]);
}

#[test]
fn validation_split_shares_training_ids() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("train.txt"), "x y y z z z\n").unwrap();
    fs::write(dir.path().join("valid.txt"), "z y x w\n").unwrap();

    let cfg = DataLoaderConfig {
        data_dir:       dir.path().display().to_string(),
        window_length:  4,
        batch_size:     1,
        min_word_count: 2,
        ..DataLoaderConfig::default()
    };

    let train = build_split(&cfg, "train", None).unwrap();
    let vocab = train.vocab.unwrap();
    let valid = build_split(&cfg, "valid", Some(&vocab)).unwrap();

    // x appears once in train and w never: both resolve to <unk>
    let src = valid.dataset.get(0).unwrap().src;
    assert_eq!(src, vec![vocab.id("z"), vocab.id("y"), UNK_ID, UNK_ID]);
    assert_eq!(vocab.size(), 4);
}

#[test]
fn exact_multiple_corpus_pads_last_target() {
    // 5 tokens + <eos> = 6 = B * L exactly
    let corpus = TextCorpus::from_text("mem", "a b c d e\n");
    let vocab  = window_lm_data::build_vocabulary(&corpus, 1).unwrap();
    let ds     = WindowedCorpusDataset::new(&corpus, &vocab, 3, 2).unwrap();

    let items: Vec<_> = (0..ds.len()).filter_map(|i| ds.get(i)).collect();
    let batch = window_lm_data::collate(&items);

    assert_eq!(batch.tgt.shape(), [2, 3]);
    assert_eq!(batch.tgt.lengths, vec![3, 2]);
    assert_eq!(batch.tgt.row(1)[2], window_lm_data::PAD_ID);
}
