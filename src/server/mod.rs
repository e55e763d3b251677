// Server module entry point
// Provides listener creation, the accept loop and per-connection handling

pub mod connection;
pub mod listener;

// `loop` is a keyword, so the module file is mapped to server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;
