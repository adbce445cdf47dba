//! CLI command implementations.

pub mod cart;
pub mod shop;

use stallfront_storefront::{CartStore, FileStorage, Notifier, StorefrontConfig};

/// Prints acknowledgements to stdout in place of a browser alert.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    #[allow(clippy::print_stdout)]
    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Open the file-backed cart slot described by `config`.
pub fn open_store(config: &StorefrontConfig) -> CartStore<FileStorage> {
    CartStore::new(FileStorage::new(&config.data_dir), config.cart_key.clone())
}
