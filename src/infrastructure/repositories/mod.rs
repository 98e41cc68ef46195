pub mod chat_repository;
pub mod minimax_speech_repository;
pub mod openai_chat_repository;
pub mod speech_repository;

pub use chat_repository::ChatRepository;
pub use minimax_speech_repository::MinimaxSpeechRepository;
pub use openai_chat_repository::OpenAiChatRepository;
pub use speech_repository::SpeechRepository;
