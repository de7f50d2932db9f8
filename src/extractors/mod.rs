pub mod progression_extractor;
