//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# rectkit configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "rectkit"
# width = 1280           # 1-16384
# height = 720           # 1-16384

[camera]
# origin = "top-left"    # top-left, bottom-left
# near = 1.0
# far = -1.0             # must differ from near

[renderer]
# clear_color = "#1a1a1a"
# blend = "alpha"        # alpha, premultiplied, replace
# initial_instance_capacity = 1024   # 1-1048576
# vsync = true

[atlas]
# path = "assets/atlas.png"   # unset: generated demo atlas
# filter = "linear"           # nearest, linear
# address_mode = "clamp-to-edge"   # clamp-to-edge, repeat, mirror-repeat

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}
