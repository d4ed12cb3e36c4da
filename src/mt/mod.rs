/// Machine Translation Module
///
/// This module provides the provider side of Hortina localization: a generic
/// `MachineTranslator` trait, the DeepL implementation used in production, a
/// deterministic mock for tests, and the in-memory cache that memoizes
/// translation results for the lifetime of a session.
///
/// # Overview
///
/// 1. **MT Trait & Providers** - One outbound request per call, explicit or auto-detected source
/// 2. **Translation Cache** - Write-once memo table keyed by (source, target, text)
///
/// The decision logic that combines both lives in [`crate::localizer`].
///
/// # Example
///
/// ```ignore
/// use hortina_l10n::mt::{DeepLProvider, MachineTranslator};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let provider = DeepLProvider::from_env()?;
///     let result = provider.translate_with_source("pera", "ES", "EN").await?;
///     println!("{:?}", result);
///     Ok(())
/// }
/// ```
pub mod cache;
pub mod deepl;
pub mod error;
pub mod mock;
pub mod translator;

pub use cache::{SourceLang, TranslationCache, TranslationKey};
pub use deepl::DeepLProvider;
pub use error::{MtError, MtResult};
pub use mock::{MockCall, MockMode, MockTranslator};
pub use translator::{MachineTranslator, TranslationResult};
