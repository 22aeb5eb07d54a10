#![no_std]

pub mod proxy_factory;
pub mod proxy_flash_pool;
pub mod proxy_handler;
pub mod proxy_handler_comet;
pub mod proxy_handler_ctoken;
pub mod proxy_handler_isolated;
pub mod proxy_handler_pooled;
pub mod proxy_handler_vault;
pub mod proxy_market;
pub mod proxy_pausable_manager;
pub mod proxy_position_manager;
pub mod proxy_registry;
pub mod proxy_safe_module_manager;
pub mod proxy_swap;
pub mod proxy_timelock;
pub mod proxy_wallet;
