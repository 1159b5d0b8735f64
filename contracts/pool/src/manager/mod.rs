pub mod update_config;
