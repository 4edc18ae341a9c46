// Adapters layer: concrete implementations of the domain ports.

pub mod emailjs;

pub use emailjs::EmailJsClient;
