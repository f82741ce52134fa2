mod artifact_filesystem;
mod gemini_client_http;
pub mod prompt_compiler;

pub use artifact_filesystem::FilesystemArtifactStore;
pub use gemini_client_http::HttpGeminiClient;
