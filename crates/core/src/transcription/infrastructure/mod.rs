pub mod gladia_client;
