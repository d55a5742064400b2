mod embedding;
mod repository;
mod similarity;

pub use embedding::IEmbeddingProvider;
pub use repository::IMatchRepository;
pub use similarity::ITextSimilarity;
