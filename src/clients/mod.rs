pub mod actor_api_client;
