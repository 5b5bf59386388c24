pub mod session_middleware;
