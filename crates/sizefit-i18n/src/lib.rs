pub mod locale;
pub mod messages;

pub use locale::{Locale, SUPPORTED_LOCALES};
pub use messages::{
    ConverterMessages, I18nError, Messages, TableMessages, load_messages, load_messages_or_default,
};
