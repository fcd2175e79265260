pub mod count_label_frequencies;
pub use count_label_frequencies::count_label_frequencies;

pub mod decompress_gzip;
pub use decompress_gzip::decompress_gzip_to_string;

pub mod dedup_vector;
pub use dedup_vector::{dedup_vector, dedup_vector_by_key};

pub mod read_batch_texts;
pub use read_batch_texts::read_batch_texts;

pub mod read_lexicon_tsv;
pub use read_lexicon_tsv::read_lexicon_tsv;
