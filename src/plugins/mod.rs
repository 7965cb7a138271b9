//! Plugins for enhancing the default implementation of dollarmath can be defined in this module.

#[cfg(feature = "katex")]
#[cfg_attr(docsrs, doc(cfg(feature = "katex")))]
pub mod katex;
