//! Reading CSS from text, bytes and files into the object model.

mod context;
mod css_reader;
mod declaration_list_reader;
mod error_handler;
mod settings;

pub use context::LibraryContext;
pub use css_reader::CssReader;
pub use declaration_list_reader::CssDeclarationListReader;
pub use error_handler::{
    ChainedParseErrorHandler, CollectingInterpretErrorHandler, CollectingParseErrorHandler,
    DoNothingInterpretErrorHandler, DoNothingParseErrorHandler, DoNothingParseExceptionHandler,
    InterpretErrorHandler, InterpretLevel, LoggingInterpretErrorHandler, LoggingParseErrorHandler,
    LoggingParseExceptionHandler, ParseErrorHandler, ParseExceptionHandler,
    ThrowingParseErrorHandler,
};
pub use settings::{DEFAULT_TAB_SIZE, ReaderSettings};
