// Adapters layer: concrete implementations of the domain ports.

pub mod export;
pub mod http;
pub mod supabase;

pub use http::HttpPageSource;
pub use supabase::SupabaseSink;
