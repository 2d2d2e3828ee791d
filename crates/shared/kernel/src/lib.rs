//! Kernel of the AppFlow resource models.
//! Everything a typed resource needs beyond its own property records: the [`CfnResource`]
//! contract, stacks that synthesize templates, template parsing, tags, validation and config
//! loading.
//!
//! ## Synthesizing
//! ```rust,ignore
//! use appflow_kernel::prelude::*;
//!
//! let mut stack = Stack::new().with_description("sales sync");
//! let arn = stack.add(profile)?.attr("ConnectorProfileArn")?;
//! stack.add_output("ProfileArn", arn, None)?;
//! let template = stack.synth()?;
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use appflow_domain::config::AppConfig;
//! use appflow_kernel::config::load_config;
//!
//! let cfg: AppConfig = load_config(None::<&str>)?;
//! ```

pub mod config;
pub mod error;
pub mod inspector;
pub mod logical_id;
pub mod options;
pub mod prelude;
pub mod resource;
pub mod stack;
pub mod tags;
pub mod template;
pub mod validate;

pub use appflow_domain as domain;
pub use error::{CfnError, CfnErrorExt};
pub use resource::{CfnResource, ResourceNode};
