pub mod server;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        dsn: String,
        origin: String,
        session_ttl: u64,
    },
}
