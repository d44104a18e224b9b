/// Name of the generated descriptor file.
pub const STARBUILD_FILENAME: &str = "STARBUILD";

/// First line of every generated descriptor.
pub const HEADER_COMMENT: &str = "# STARBUILD generated by StarbuildCreator";

/// Package name substituted when no usable name was given.
pub const DEFAULT_PACKAGE_NAME: &str = "mypackage";

/// Sole line of a script the user left empty.
pub const SCRIPT_PLACEHOLDER: &str = "# Add your commands here";

/// Line that terminates multi-line script entry.
pub const SCRIPT_END_MARKER: &str = "END";

/// File extension for saved templates.
pub const TEMPLATE_EXTENSION: &str = "template";

/// Default templates directory, relative to the working directory.
pub const TEMPLATES_DIR: &str = "templates";

/// Environment variable overriding the templates directory.
pub const TEMPLATES_DIR_ENV: &str = "STARBUILD_TEMPLATES_DIR";
