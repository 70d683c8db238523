pub mod sync_client;
