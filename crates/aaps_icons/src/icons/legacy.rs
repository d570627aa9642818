//! Icons kept for older screens that no longer reference them directly.
//!
//! Converted from the AAPS vector drawables

use std::sync::LazyLock;

use aaps_vector::{Color, IconDefinition, PathStyle};

/// Icon for Activity Treatments.
pub static IC_ACTIVITY_TREATMENTS: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcActivityTreatments", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Activity Treatments.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(3.147, 20.616)
                .vertical_line_to(3.384)
                .curve_to_relative(0.0, -1.206, 0.979, -2.184, 2.184, -2.184)
                .horizontal_line_to_relative(10.851)
                .curve_to_relative(1.206, 0.0, 2.184, 0.979, 2.184, 2.184)
                .vertical_line_to_relative(17.232)
                .curve_to_relative(0.0, 1.206, -0.979, 2.184, -2.184, 2.184)
                .horizontal_line_to(5.331)
                .curve_to(4.126, 22.8, 3.147, 21.821, 3.147, 20.616)
                .close()
                .move_to(10.757, 16.817)
                .horizontal_line_to_relative(0.114)
                .curve_to_relative(2.933, 0.0, 5.314, -2.381, 5.314, -5.314)
                .curve_to_relative(0.0, -2.933, -2.381, -5.314, -5.314, -5.314)
                .curve_to_relative(-0.019, 0.0, -0.038, 0.0, -0.057, 0.0)
                .curve_to_relative(-0.019, 0.0, -0.038, 0.0, -0.057, 0.0)
                .curve_to_relative(-2.933, 0.0, -5.314, 2.381, -5.314, 5.314)
                .curve_to(5.443, 14.436, 7.824, 16.817, 10.757, 16.817)
                .close()
                .move_to(14.865, 12.706)
                .vertical_line_to(10.3)
                .horizontal_line_to_relative(-7.99)
                .vertical_line_to_relative(2.406)
                .horizontal_line_to(14.865)
                .close()
                .move_to(9.668, 15.498)
                .line_to_relative(2.406, 0.0)
                .line_to_relative(-0.001, -7.99)
                .line_to_relative(-2.406, 0.0)
                .line_to(9.668, 15.498)
                .close()
                .move_to(19.974, 8.255)
                .vertical_line_to(7.508)
                .horizontal_line_to(18.57)
                .vertical_line_to_relative(0.747)
                .horizontal_line_to(19.974)
                .close()
                .move_to(19.974, 15.497)
                .vertical_line_to(14.75)
                .horizontal_line_to(18.57)
                .vertical_line_to_relative(0.747)
                .horizontal_line_to(19.974)
                .close()
                .move_to(20.853, 8.06)
                .curve_to_relative(0.0, 0.305, -0.745, 0.856, -0.79, 0.553)
                .curve_to_relative(-0.054, -0.358, -0.484, -0.535, -0.791, -0.553)
                .curve_to_relative(-0.435, -0.025, 0.354, -0.552, 0.791, -0.552)
                .curve_to(20.499, 7.508, 20.853, 7.756, 20.853, 8.06)
                .close()
                .move_to(20.853, 14.968)
                .vertical_line_to(8.036)
                .horizontal_line_to_relative(-0.88)
                .vertical_line_to_relative(6.932)
                .horizontal_line_to(20.853)
                .close()
                .move_to(20.853, 14.914)
                .curve_to_relative(0.0, 0.322, -0.354, 0.584, -0.79, 0.584)
                .curve_to_relative(-0.436, 0.0, -1.206, -0.486, -0.791, -0.584)
                .curve_to_relative(0.242, -0.057, 0.757, -0.142, 0.791, -0.584)
                .curve_to(20.086, 14.009, 20.853, 14.592, 20.853, 14.914)
                .close()
        })
        .build()
});

/// Icon for Center Arrow.
pub static IC_ARROW_CENTER: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcArrowCenter", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Center Arrow.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(12.0, 1.2)
                .curve_to(6.035, 1.2, 1.2, 6.035, 1.2, 12.0)
                .reflective_curve_to(6.035, 22.8, 12.0, 22.8)
                .reflective_curve_to(22.8, 17.965, 22.8, 12.0)
                .reflective_curve_to(17.965, 1.2, 12.0, 1.2)
                .close()
                .move_to(12.0, 19.312)
                .curve_to_relative(-4.038, 0.0, -7.312, -3.274, -7.312, -7.312)
                .reflective_curve_to(7.962, 4.688, 12.0, 4.688)
                .reflective_curve_to(19.312, 7.962, 19.312, 12.0)
                .reflective_curve_to(16.038, 19.312, 12.0, 19.312)
                .close()
                .move_to(12.0, 13.744)
                .curve_to_relative(-0.963, 0.0, -1.744, -0.781, -1.744, -1.744)
                .reflective_curve_to_relative(0.781, -1.744, 1.744, -1.744)
                .reflective_curve_to_relative(1.744, 0.781, 1.744, 1.744)
                .reflective_curve_to_relative(-0.781, 1.744, -1.744, 1.744)
                .close()
        })
        .build()
});

/// Icon for Flat Arrow.
pub static IC_ARROW_FLAT: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcArrowFlat", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Flat Arrow.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(16.653, 17.772)
                .curve_to_relative(1.967, -2.121, 4.43, -4.65, 6.145, -5.771)
                .horizontal_line_to(22.8)
                .line_to(22.799, 12.0)
                .line_to_relative(0.001, -0.001)
                .horizontal_line_to_relative(-0.002)
                .curve_to_relative(-1.715, -1.121, -4.178, -3.65, -6.145, -5.771)
                .line_to_relative(-1.979, 1.44)
                .curve_to_relative(0.0, 0.0, 1.53, 1.715, 2.964, 3.188)
                .horizontal_line_to(1.2)
                .vertical_line_to_relative(2.286)
                .horizontal_line_to_relative(16.438)
                .curve_to_relative(-1.434, 1.474, -2.964, 3.189, -2.964, 3.189)
                .line_to(16.653, 17.772)
                .close()
        })
        .build()
});

/// Icon for No TBR (Temporary Basal Rate).
pub static IC_NO_TBR: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcNoTbr", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for No TBR (Temporary Basal Rate).")
        .path(PathStyle::new().fill(Color::from_argb(0xFFCF8BFE)), |p| {
            p.move_to(1.2, 11.306)
                .horizontal_line_to_relative(21.6)
                .vertical_line_to_relative(1.387)
                .horizontal_line_to(1.2)
                .vertical_line_to(11.306)
                .close()
        })
        .build()
});

/// Icon for Action Plugin.
pub static IC_PLUGIN_ACTION: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginAction", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Action Plugin.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(14.143, 5.912)
                .curve_to_relative(-0.518, 0.895, -0.207, 2.054, 0.688, 2.573)
                .curve_to_relative(0.895, 0.518, 2.054, 0.207, 2.573, -0.688)
                .curve_to_relative(0.518, -0.895, 0.207, -2.054, -0.688, -2.573)
                .curve_to(15.821, 4.706, 14.661, 5.016, 14.143, 5.912)
                .close()
                .move_to(15.622, 10.068)
                .curve_to_relative(0.0, 0.0, -1.536, -0.886, -2.45, -1.414)
                .curve_to_relative(-2.243, -1.301, -3.016, -4.184, -1.715, -6.427)
                .line_to_relative(-1.63, -0.942)
                .curve_to_relative(-1.498, 2.582, -1.027, 5.768, 0.914, 7.832)
                .line_to_relative(-4.853, 8.406)
                .line_to_relative(1.63, 0.942)
                .line_to_relative(1.414, -2.45)
                .line_to_relative(1.63, 0.942)
                .line_to_relative(-2.827, 4.901)
                .line_to_relative(1.63, 0.942)
                .line_to_relative(5.928, -10.263)
                .curve_to_relative(1.074, 1.461, 1.253, 3.478, 0.292, 5.146)
                .line_to_relative(1.63, 0.942)
                .curve_to(18.723, 16.033, 18.421, 12.424, 15.622, 10.068)
                .close()
                .move_to(12.71, 3.838)
                .curve_to_relative(0.679, 0.386, 1.536, 0.16, 1.932, -0.518)
                .curve_to_relative(0.386, -0.679, 0.16, -1.536, -0.518, -1.932)
                .curve_to_relative(-0.679, -0.386, -1.536, -0.16, -1.932, 0.518)
                .curve_to(11.806, 2.585, 12.032, 3.452, 12.71, 3.838)
                .close()
        })
        .build()
});

/// Icon for Config Builder Plugin.
pub static IC_PLUGIN_CONFIG_BUILDER: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginConfigBuilder", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Config Builder Plugin.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(18.485, 9.831)
                .line_to_relative(-0.277, 0.483)
                .curve_to_relative(-0.101, 0.179, -0.317, 0.253, -0.51, 0.182)
                .curve_to_relative(-0.398, -0.149, -0.763, -0.361, -1.083, -0.628)
                .curve_to_relative(-0.155, -0.128, -0.196, -0.354, -0.095, -0.53)
                .line_to_relative(0.277, -0.483)
                .curve_to_relative(-0.233, -0.27, -0.415, -0.584, -0.537, -0.925)
                .horizontal_line_to_relative(-0.557)
                .curve_to_relative(-0.203, 0.0, -0.378, -0.145, -0.412, -0.348)
                .curve_to_relative(-0.068, -0.405, -0.071, -0.83, 0.0, -1.252)
                .curve_to_relative(0.034, -0.203, 0.209, -0.351, 0.412, -0.351)
                .horizontal_line_to_relative(0.557)
                .curve_to_relative(0.122, -0.341, 0.304, -0.655, 0.537, -0.925)
                .line_to_relative(-0.277, -0.483)
                .curve_to_relative(-0.101, -0.176, -0.064, -0.402, 0.095, -0.53)
                .curve_to_relative(0.321, -0.267, 0.689, -0.479, 1.083, -0.628)
                .curve_to_relative(0.192, -0.071, 0.408, 0.003, 0.51, 0.182)
                .line_to_relative(0.277, 0.483)
                .curve_to_relative(0.354, -0.064, 0.716, -0.064, 1.07, 0.0)
                .line_to_relative(0.277, -0.483)
                .curve_to_relative(0.101, -0.179, 0.317, -0.253, 0.51, -0.182)
                .curve_to_relative(0.398, 0.149, 0.763, 0.361, 1.083, 0.628)
                .curve_to_relative(0.155, 0.128, 0.196, 0.354, 0.095, 0.53)
                .line_to_relative(-0.277, 0.483)
                .curve_to_relative(0.233, 0.27, 0.415, 0.584, 0.537, 0.925)
                .horizontal_line_to_relative(0.557)
                .curve_to_relative(0.203, 0.0, 0.378, 0.145, 0.412, 0.348)
                .curve_to_relative(0.068, 0.405, 0.071, 0.83, 0.0, 1.252)
                .curve_to_relative(-0.034, 0.203, -0.209, 0.351, -0.412, 0.351)
                .horizontal_line_to_relative(-0.557)
                .curve_to_relative(-0.122, 0.341, -0.304, 0.655, -0.537, 0.925)
                .line_to_relative(0.277, 0.483)
                .curve_to_relative(0.101, 0.176, 0.064, 0.402, -0.095, 0.53)
                .curve_to_relative(-0.321, 0.267, -0.689, 0.479, -1.083, 0.628)
                .curve_to_relative(-0.192, 0.071, -0.408, -0.003, -0.51, -0.182)
                .line_to_relative(-0.277, -0.483)
                .curve_to(19.204, 9.896, 18.84, 9.896, 18.485, 9.831)
                .close()
                .move_to(18.131, 7.847)
                .curve_to_relative(1.299, 0.999, 2.781, -0.483, 1.782, -1.782)
                .curve_to(18.613, 5.062, 17.132, 6.547, 18.131, 7.847)
                .line_to(18.131, 7.847)
                .close()
                .move_to(14.239, 13.041)
                .line_to_relative(1.137, 0.567)
                .curve_to_relative(0.341, 0.196, 0.489, 0.611, 0.354, 0.982)
                .curve_to_relative(-0.3, 0.817, -0.891, 1.566, -1.438, 2.221)
                .curve_to_relative(-0.25, 0.3, -0.682, 0.375, -1.023, 0.179)
                .line_to_relative(-0.982, -0.567)
                .curve_to_relative(-0.54, 0.462, -1.168, 0.83, -1.853, 1.07)
                .vertical_line_to_relative(1.134)
                .curve_to_relative(0.0, 0.392, -0.28, 0.729, -0.665, 0.797)
                .curve_to_relative(-0.83, 0.142, -1.701, 0.149, -2.562, 0.0)
                .curve_to_relative(-0.388, -0.068, -0.675, -0.402, -0.675, -0.797)
                .vertical_line_to_relative(-1.134)
                .curve_to_relative(-0.685, -0.243, -1.313, -0.608, -1.853, -1.07)
                .line_to_relative(-0.982, 0.564)
                .curve_to_relative(-0.338, 0.196, -0.773, 0.122, -1.023, -0.179)
                .curve_to_relative(-0.547, -0.655, -1.124, -1.404, -1.424, -2.218)
                .curve_to_relative(-0.135, -0.368, 0.014, -0.783, 0.354, -0.982)
                .line_to_relative(1.124, -0.567)
                .curve_to_relative(-0.132, -0.705, -0.132, -1.431, 0.0, -2.14)
                .line_to_relative(-1.124, -0.57)
                .curve_to(1.264, 10.135, 1.113, 9.72, 1.251, 9.352)
                .curve_to_relative(0.3, -0.817, 0.878, -1.566, 1.424, -2.221)
                .curve_to_relative(0.25, -0.3, 0.682, -0.375, 1.023, -0.179)
                .line_to(4.68, 7.519)
                .curve_to_relative(0.54, -0.462, 1.168, -0.83, 1.853, -1.07)
                .vertical_line_to(5.312)
                .curve_to_relative(0.0, -0.388, 0.277, -0.726, 0.662, -0.793)
                .curve_to(8.025, 4.377, 8.899, 4.37, 9.76, 4.515)
                .curve_to_relative(0.388, 0.068, 0.675, 0.402, 0.675, 0.797)
                .vertical_line_to_relative(1.134)
                .curve_to_relative(0.685, 0.243, 1.313, 0.608, 1.853, 1.07)
                .line_to_relative(0.982, -0.567)
                .curve_to_relative(0.338, -0.196, 0.773, -0.122, 1.023, 0.179)
                .curve_to_relative(0.547, 0.655, 1.121, 1.404, 1.421, 2.221)
                .curve_to_relative(0.135, 0.368, 0.003, 0.783, -0.338, 0.982)
                .line_to_relative(-1.137, 0.567)
                .curve_to(14.371, 11.607, 14.371, 12.332, 14.239, 13.041)
                .close()
                .move_to(10.27, 13.753)
                .curve_to_relative(1.998, -2.599, -0.969, -5.566, -3.568, -3.568)
                .curve_to(4.704, 12.785, 7.671, 15.752, 10.27, 13.753)
                .close()
                .move_to(18.485, 19.92)
                .line_to_relative(-0.277, 0.483)
                .curve_to_relative(-0.101, 0.179, -0.317, 0.253, -0.51, 0.182)
                .curve_to_relative(-0.398, -0.149, -0.763, -0.361, -1.083, -0.628)
                .curve_to_relative(-0.155, -0.128, -0.196, -0.354, -0.095, -0.53)
                .line_to_relative(0.277, -0.483)
                .curve_to_relative(-0.233, -0.27, -0.415, -0.584, -0.537, -0.925)
                .horizontal_line_to_relative(-0.557)
                .curve_to_relative(-0.203, 0.0, -0.378, -0.145, -0.412, -0.348)
                .curve_to_relative(-0.068, -0.405, -0.071, -0.83, 0.0, -1.252)
                .curve_to_relative(0.034, -0.203, 0.209, -0.351, 0.412, -0.351)
                .horizontal_line_to_relative(0.557)
                .curve_to_relative(0.122, -0.341, 0.304, -0.655, 0.537, -0.925)
                .line_to_relative(-0.277, -0.483)
                .curve_to_relative(-0.101, -0.176, -0.064, -0.402, 0.095, -0.53)
                .curve_to_relative(0.321, -0.267, 0.689, -0.479, 1.083, -0.628)
                .curve_to_relative(0.192, -0.071, 0.408, 0.003, 0.51, 0.182)
                .line_to_relative(0.277, 0.483)
                .curve_to_relative(0.354, -0.064, 0.716, -0.064, 1.07, 0.0)
                .line_to_relative(0.277, -0.483)
                .curve_to_relative(0.101, -0.179, 0.317, -0.253, 0.51, -0.182)
                .curve_to_relative(0.398, 0.149, 0.763, 0.361, 1.083, 0.628)
                .curve_to_relative(0.155, 0.128, 0.196, 0.354, 0.095, 0.53)
                .line_to_relative(-0.277, 0.483)
                .curve_to_relative(0.233, 0.27, 0.415, 0.584, 0.537, 0.925)
                .horizontal_line_to_relative(0.557)
                .curve_to_relative(0.203, 0.0, 0.378, 0.145, 0.412, 0.348)
                .curve_to_relative(0.068, 0.405, 0.071, 0.83, 0.0, 1.252)
                .curve_to_relative(-0.034, 0.203, -0.209, 0.351, -0.412, 0.351)
                .horizontal_line_to_relative(-0.557)
                .curve_to_relative(-0.122, 0.341, -0.304, 0.655, -0.537, 0.925)
                .line_to_relative(0.277, 0.483)
                .curve_to_relative(0.101, 0.176, 0.064, 0.402, -0.095, 0.53)
                .curve_to_relative(-0.321, 0.267, -0.689, 0.479, -1.083, 0.628)
                .curve_to_relative(-0.192, 0.071, -0.408, -0.003, -0.51, -0.182)
                .line_to_relative(-0.277, -0.483)
                .curve_to(19.204, 19.984, 18.84, 19.984, 18.485, 19.92)
                .close()
                .move_to(18.131, 17.932)
                .curve_to_relative(1.299, 0.999, 2.781, -0.483, 1.782, -1.782)
                .curve_to(18.613, 15.151, 17.132, 16.633, 18.131, 17.932)
                .line_to(18.131, 17.932)
                .close()
        })
        .build()
});

/// Icon for Maintenance Plugin.
pub static IC_PLUGIN_MAINTENANCE: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginMaintenance", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Maintenance Plugin.")
        .path(PathStyle::new().fill(Color::WHITE), |p| {
            p.move_to(11.195, 9.574)
                .curve_to_relative(0.559, 1.506, 1.709, 2.721, 3.164, 3.354)
                .curve_to_relative(-0.041, 0.405, -0.217, 0.798, -0.527, 1.107)
                .line_to_relative(-8.171, 8.171)
                .curve_to_relative(-0.715, 0.715, -1.876, 0.715, -2.591, 0.0)
                .line_to_relative(-1.335, -1.335)
                .curve_to_relative(-0.715, -0.715, -0.715, -1.876, 0.0, -2.591)
                .line_to_relative(8.171, -8.171)
                .curve_to(10.263, 9.754, 10.729, 9.576, 11.195, 9.574)
                .close()
                .move_to(22.798, 7.029)
                .curve_to(22.8, 7.071, 22.8, 7.114, 22.8, 7.156)
                .curve_to_relative(0.0, 3.256, -2.594, 5.9, -5.789, 5.9)
                .reflective_curve_to_relative(-5.789, -2.644, -5.789, -5.9)
                .curve_to_relative(0.0, -3.256, 2.594, -5.899, 5.789, -5.899)
                .curve_to_relative(1.386, 0.0, 2.659, 0.497, 3.656, 1.327)
                .line_to_relative(-4.452, 2.651)
                .vertical_line_to_relative(2.91)
                .line_to_relative(2.562, 1.355)
                .line_to_relative(0.032, 0.053)
                .line_to_relative(0.031, -0.02)
                .line_to_relative(0.037, 0.02)
                .line_to_relative(0.01, -0.05)
                .line_to(22.798, 7.029)
                .close()
        })
        .build()
});

/// Icon for Low TBR (Temporary Basal Rate).
pub static IC_TBR_LOW: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcTbrLow", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Low TBR (Temporary Basal Rate).")
        .path(PathStyle::new().fill(Color::from_argb(0xFFCF8BFE)), |p| {
            p.move_to(12.681, 20.281)
                .line_to(12.681, 5.106)
                .line_to(1.2, 5.106)
                .line_to(1.2, 3.719)
                .line_to(14.068, 3.719)
                .line_to(14.068, 18.893)
                .line_to(19.151, 18.893)
                .line_to(19.151, 3.719)
                .line_to(22.8, 3.719)
                .line_to(22.8, 5.106)
                .line_to(20.539, 5.106)
                .line_to(20.539, 20.281)
                .close()
        })
        .build()
});
