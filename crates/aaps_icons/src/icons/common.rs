//! Application-level glyphs used by the overview and plugin screens.
//!
//! Converted from the AAPS vector drawables

use std::sync::LazyLock;

use aaps_vector::{Color, IconDefinition, PathFillType, PathStyle, StrokeCap};

/// Icon for BYODA (Build Your Own Dexcom App) CGM source.
pub static BYODA: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("Byoda", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for BYODA (Build Your Own Dexcom App) CGM source.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(12.107, 3.666)
                .curve_to_relative(-4.603, 0.0, -8.335, 3.732, -8.335, 8.335)
                .reflective_curve_to_relative(3.732, 8.335, 8.335, 8.335)
                .reflective_curve_to_relative(8.335, -3.731, 8.335, -8.335)
                .vertical_line_to(3.666)
                .horizontal_line_to(12.107)
                .close()
                .move_to(12.107, 18.335)
                .curve_to_relative(-3.498, 0.0, -6.334, -2.836, -6.334, -6.334)
                .curve_to_relative(0.0, -3.498, 2.836, -6.334, 6.334, -6.334)
                .curve_to_relative(3.498, 0.0, 6.334, 2.836, 6.334, 6.334)
                .curve_to(18.442, 15.499, 15.606, 18.335, 12.107, 18.335)
                .close()
        })
        .build()
});

/// Icon for Calibration action.
pub static CALIBRATION: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("Calibration", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Calibration action.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(7.305, 4.482)
                .curve_to_relative(1.782, 2.914, 4.332, 5.382, 3.916, 9.05)
                .curve_to_relative(-0.256, 2.254, -2.529, 3.635, -4.783, 3.199)
                .curve_to_relative(-2.145, -0.415, -3.625, -2.546, -3.171, -4.728)
                .curve_to(3.858, 9.168, 5.537, 6.894, 7.305, 4.482)
                .close()
                .move_to(5.08, 10.061)
                .curve_to_relative(-0.212, 0.638, -0.489, 1.262, -0.621, 1.916)
                .curve_to_relative(-0.205, 1.017, -0.065, 1.994, 0.764, 2.731)
                .curve_to_relative(0.297, 0.264, 0.68, 0.354, 1.038, 0.077)
                .curve_to_relative(0.242, -0.187, 0.269, -0.46, 0.096, -0.692)
                .curve_to(5.468, 12.903, 5.032, 11.589, 5.08, 10.061)
                .close()
        })
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(17.959, 4.566)
                .curve_to_relative(1.073, 1.453, 2.073, 2.837, 2.489, 4.535)
                .curve_to_relative(0.28, 1.143, -0.069, 2.1, -1.037, 2.763)
                .curve_to_relative(-0.943, 0.645, -1.961, 0.655, -2.904, 0.009)
                .curve_to_relative(-0.967, -0.662, -1.318, -1.635, -1.041, -2.769)
                .curve_to(15.88, 7.408, 16.875, 6.019, 17.959, 4.566)
                .close()
        })
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(14.82, 14.425)
                .curve_to_relative(0.797, 1.094, 1.535, 2.104, 1.819, 3.355)
                .curve_to_relative(0.188, 0.826, -0.096, 1.498, -0.784, 1.965)
                .curve_to_relative(-0.669, 0.454, -1.393, 0.467, -2.067, 0.014)
                .curve_to_relative(-0.688, -0.462, -0.985, -1.13, -0.8, -1.959)
                .curve_to(13.272, 16.531, 14.004, 15.503, 14.82, 14.425)
                .close()
        })
        .build()
});

/// Icon for BG Check.
pub static IC_BG_CHECK: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcBgCheck", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for BG Check.")
        .path(PathStyle::new().fill(Color::from_argb(0xFFE83258)), |p| {
            p.move_to(3.511, 15.551)
                .curve_to_relative(-0.028, -0.497, 0.039, -0.963, 0.644, -1.034)
                .curve_to_relative(0.555, -0.065, 0.756, 0.335, 0.819, 0.795)
                .curve_to_relative(0.239, 1.743, 1.188, 2.773, 2.958, 3.001)
                .curve_to_relative(0.518, 0.067, 0.912, 0.296, 0.814, 0.883)
                .curve_to_relative(-0.09, 0.541, -0.575, 0.598, -1.008, 0.597)
                .curve_to(5.653, 19.788, 3.535, 17.651, 3.511, 15.551)
                .close()
        })
        .path(PathStyle::new().fill(Color::from_argb(0xFFE83258)), |p| {
            p.move_to(22.669, 7.574)
                .curve_to_relative(-0.581, -2.289, -2.977, -5.731, -3.477, -5.731)
                .curve_to_relative(-0.5, 0.0, -2.904, 3.449, -3.482, 5.734)
                .curve_to_relative(-0.387, 1.528, 0.103, 2.839, 1.454, 3.731)
                .curve_to_relative(1.318, 0.87, 2.739, 0.856, 4.056, -0.012)
                .curve_to(22.573, 10.404, 23.06, 9.113, 22.669, 7.574)
                .close()
                .move_to(20.542, 10.266)
                .curve_to_relative(-0.458, 0.302, -0.916, 0.455, -1.365, 0.455)
                .curve_to_relative(-0.441, 0.0, -0.889, -0.149, -1.335, -0.442)
                .curve_to_relative(-0.903, -0.597, -1.201, -1.36, -0.938, -2.4)
                .curve_to_relative(0.364, -1.438, 1.536, -3.342, 2.287, -4.335)
                .curve_to_relative(0.749, 0.992, 1.917, 2.894, 2.283, 4.333)
                .curve_to(21.738, 8.914, 21.441, 9.673, 20.542, 10.266)
                .close()
                .move_to(14.841, 13.727)
                .curve_to_relative(-1.119, -4.405, -5.999, -11.21, -6.692, -11.21)
                .curve_to_relative(-0.693, 0.0, -5.589, 6.819, -6.702, 11.215)
                .curve_to_relative(-0.745, 2.94, 0.198, 5.464, 2.798, 7.181)
                .curve_to_relative(2.537, 1.675, 5.272, 1.648, 7.807, -0.023)
                .curve_to(14.656, 19.174, 15.593, 16.69, 14.841, 13.727)
                .close()
                .move_to(11.373, 19.862)
                .curve_to_relative(-1.07, 0.704, -2.165, 1.062, -3.254, 1.062)
                .curve_to_relative(-1.076, 0.0, -2.151, -0.349, -3.195, -1.04)
                .curve_to_relative(-2.14, -1.411, -2.907, -3.38, -2.282, -5.849)
                .curve_to_relative(0.867, -3.421, 5.135, -9.463, 5.507, -9.463)
                .curve_to_relative(0.372, 0.0, 4.628, 6.035, 5.498, 9.459)
                .curve_to(14.273, 16.493, 13.507, 18.455, 11.373, 19.862)
                .close()
        })
        .build()
});

/// Icon for Disconnected Loop.
pub static IC_LOOP_DISCONNECTED: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcLoopDisconnected", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Disconnected Loop.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(16.428, 3.702)
                .curve_to_relative(-1.542, -1.017, -3.386, -1.612, -5.371, -1.612)
                .curve_to_relative(-5.399, 0.0, -9.775, 4.376, -9.775, 9.775)
                .curve_to_relative(0.0, 1.773, 0.476, 3.433, 1.304, 4.865)
                .line_to_relative(-0.313, 0.359)
                .curve_to_relative(-0.001, 0.829, 0.319, 1.653, 0.993, 2.24)
                .line_to_relative(2.377, 2.069)
                .line_to_relative(0.858, -0.986)
                .line_to_relative(1.718, 1.498)
                .line_to_relative(0.465, -0.533)
                .line_to_relative(-1.718, -1.498)
                .line_to_relative(1.251, -1.437)
                .line_to_relative(1.72, 1.5)
                .line_to_relative(0.465, -0.533)
                .line_to_relative(-1.72, -1.5)
                .line_to_relative(0.857, -0.985)
                .line_to_relative(-2.377, -2.069)
                .curve_to_relative(-0.673, -0.586, -1.532, -0.79, -2.351, -0.676)
                .line_to_relative(-0.273, 0.313)
                .curve_to_relative(-0.329, -0.812, -0.519, -1.695, -0.519, -2.626)
                .curve_to_relative(0.0, -3.888, 3.152, -7.039, 7.039, -7.039)
                .curve_to_relative(1.054, 0.0, 2.051, 0.238, 2.949, 0.654)
                .curve_to_relative(0.32, 0.148, 0.629, 0.316, 0.921, 0.508)
                .line_to_relative(0.002, -0.002)
                .line_to_relative(-0.346, -1.755)
                .line_to(16.428, 3.702)
                .close()
                .move_to(22.8, 9.19)
                .line_to_relative(-5.687, -3.903)
                .line_to_relative(-1.306, 6.578)
                .line_to_relative(2.068, -1.728)
                .curve_to_relative(0.014, 0.055, 0.03, 0.109, 0.042, 0.165)
                .curve_to_relative(0.114, 0.503, 0.18, 1.025, 0.18, 1.563)
                .curve_to_relative(0.0, 0.923, -0.18, 1.803, -0.503, 2.61)
                .line_to_relative(-0.259, -0.297)
                .curve_to_relative(-0.819, -0.114, -1.678, 0.09, -2.351, 0.676)
                .line_to_relative(-2.377, 2.069)
                .line_to_relative(3.895, 4.475)
                .line_to_relative(2.377, -2.069)
                .curve_to_relative(0.674, -0.587, 0.995, -1.411, 0.993, -2.24)
                .line_to_relative(-0.34, -0.39)
                .curve_to_relative(0.819, -1.427, 1.3, -3.07, 1.3, -4.834)
                .curve_to_relative(0.0, -0.747, -0.091, -1.471, -0.25, -2.17)
                .curve_to_relative(-0.039, -0.173, -0.084, -0.344, -0.132, -0.514)
                .line_to(22.8, 9.19)
                .line_to(22.8, 9.19)
                .close()
        })
        .build()
});

/// Icon for Hide Loop Information.
pub static IC_LOOP_HIDDEN: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcLoopHidden", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Hide Loop Information.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(18.133, 18.598)
                .line_to_relative(-1.934, -1.934)
                .line_to_relative(0.0, 0.0)
                .line_to(5.882, 6.347)
                .line_to(4.325, 4.79)
                .line_to_relative(0.0, 0.0)
                .line_to_relative(-1.85, -1.85)
                .line_to(1.2, 4.216)
                .line_to_relative(1.939, 1.939)
                .curve_to(1.975, 7.761, 1.282, 9.73, 1.282, 11.865)
                .curve_to_relative(0.0, 5.399, 4.376, 9.775, 9.775, 9.775)
                .curve_to_relative(2.136, 0.0, 4.104, -0.693, 5.711, -1.856)
                .line_to_relative(1.879, 1.879)
                .line_to_relative(1.275, -1.275)
                .line_to(18.133, 18.598)
                .line_to(18.133, 18.598)
                .close()
                .move_to(11.058, 18.905)
                .curve_to_relative(-3.888, 0.0, -7.039, -3.152, -7.039, -7.039)
                .curve_to_relative(0.0, -1.378, 0.405, -2.656, 1.091, -3.74)
                .line_to_relative(9.688, 9.688)
                .curve_to(13.714, 18.499, 12.436, 18.905, 11.058, 18.905)
                .close()
                .move_to(11.058, 4.826)
                .curve_to_relative(1.054, 0.0, 2.051, 0.238, 2.949, 0.654)
                .curve_to_relative(0.32, 0.148, 0.629, 0.316, 0.921, 0.508)
                .line_to_relative(0.002, -0.002)
                .line_to_relative(-0.346, -1.755)
                .line_to_relative(1.845, -0.529)
                .curve_to_relative(-1.542, -1.017, -3.386, -1.612, -5.371, -1.612)
                .curve_to_relative(-1.959, 0.0, -3.779, 0.582, -5.308, 1.574)
                .line_to_relative(1.992, 1.992)
                .curve_to(8.73, 5.128, 9.858, 4.826, 11.058, 4.826)
                .close()
                .move_to(22.8, 9.19)
                .line_to_relative(-5.687, -3.903)
                .line_to_relative(-1.306, 6.578)
                .line_to_relative(2.068, -1.728)
                .curve_to_relative(0.014, 0.055, 0.03, 0.109, 0.042, 0.165)
                .curve_to_relative(0.114, 0.503, 0.18, 1.025, 0.18, 1.563)
                .curve_to_relative(0.0, 1.199, -0.302, 2.328, -0.831, 3.316)
                .line_to_relative(1.992, 1.992)
                .curve_to_relative(0.992, -1.529, 1.574, -3.35, 1.574, -5.308)
                .curve_to_relative(0.0, -0.747, -0.091, -1.471, -0.25, -2.17)
                .curve_to_relative(-0.039, -0.173, -0.084, -0.344, -0.132, -0.514)
                .line_to(22.8, 9.19)
                .line_to(22.8, 9.19)
                .close()
        })
        .build()
});

/// Icon for Open Loop.
pub static IC_LOOP_OPEN: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcLoopOpen", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Open Loop.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(5.437, 7.639)
                .curve_to_relative(0.401, -0.533, 0.875, -1.006, 1.409, -1.405)
                .line_to(5.468, 3.852)
                .curve_to_relative(-0.94, 0.657, -1.758, 1.475, -2.416, 2.414)
                .line_to(5.437, 7.639)
                .close()
                .move_to(2.214, 7.722)
                .curve_to_relative(-0.477, 1.017, -0.788, 2.125, -0.888, 3.296)
                .line_to_relative(2.749, -0.003)
                .curve_to(4.156, 10.34, 4.329, 9.693, 4.588, 9.09)
                .line_to(2.214, 7.722)
                .close()
                .move_to(19.907, 7.733)
                .line_to_relative(-2.372, 1.373)
                .curve_to_relative(0.258, 0.604, 0.429, 1.252, 0.509, 1.928)
                .line_to_relative(2.747, -0.003)
                .curve_to(20.691, 9.86, 20.383, 8.75, 19.907, 7.733)
                .close()
                .move_to(16.689, 7.654)
                .line_to_relative(2.382, -1.378)
                .curve_to_relative(-0.657, -0.94, -1.475, -1.758, -2.414, -2.416)
                .line_to_relative(-1.374, 2.385)
                .curve_to(15.816, 6.646, 16.289, 7.12, 16.689, 7.654)
                .close()
                .move_to(18.041, 12.714)
                .curve_to_relative(-0.42, 3.486, -3.384, 6.19, -6.983, 6.19)
                .curve_to_relative(-3.606, 0.0, -6.574, -2.713, -6.986, -6.209)
                .line_to_relative(-2.747, 0.003)
                .curve_to_relative(0.424, 5.008, 4.616, 8.942, 9.733, 8.942)
                .curve_to_relative(5.113, 0.0, 9.303, -3.927, 9.732, -8.929)
                .line_to(18.041, 12.714)
                .close()
                .move_to(8.299, 5.388)
                .curve_to_relative(0.603, -0.257, 1.251, -0.429, 1.927, -0.509)
                .line_to_relative(-0.003, -2.747)
                .curve_to(9.052, 2.231, 7.943, 2.54, 6.926, 3.016)
                .line_to(8.299, 5.388)
                .close()
                .move_to(11.906, 4.882)
                .curve_to_relative(0.676, 0.081, 1.323, 0.255, 1.926, 0.514)
                .line_to(15.2, 3.021)
                .curve_to_relative(-1.017, -0.477, -2.125, -0.788, -3.297, -0.888)
                .line_to(11.906, 4.882)
                .close()
        })
        .build()
});

/// Icon for Autotune Plugin.
pub static IC_PLUGIN_AUTOTUNE: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginAutotune", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Autotune Plugin.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(14.381, 19.549)
                .curve_to_relative(0.0, 1.634, -2.822, 2.994, -6.342, 3.056)
                .reflective_curve_to_relative(-6.555, -1.196, -6.82, -2.825)
                .curve_to_relative(-0.266, -1.63, 2.327, -3.085, 5.826, -3.269)
                .curve_to_relative(3.499, -0.185, 6.731, 0.963, 7.26, 2.578)
                .line_to(14.381, 19.549)
                .close()
                .move_to(11.74, 12.583)
                .curve_to_relative(0.0, 1.938, -1.605, 3.551, -3.606, 3.624)
                .reflective_curve_to_relative(-3.727, -1.418, -3.878, -3.351)
                .curve_to_relative(-0.151, -1.933, 1.324, -3.658, 3.313, -3.877)
                .curve_to_relative(1.99, -0.219, 3.827, 1.142, 4.129, 3.058)
                .line_to(11.74, 12.583)
                .close()
                .move_to(21.682, 6.755)
                .curve_to_relative(0.02, -0.153, 0.031, -0.31, 0.031, -0.478)
                .curve_to_relative(0.0, -0.163, -0.01, -0.326, -0.036, -0.478)
                .line_to_relative(1.033, -0.804)
                .curve_to_relative(0.092, -0.071, 0.117, -0.209, 0.061, -0.31)
                .line_to_relative(-0.977, -1.689)
                .curve_to_relative(-0.061, -0.112, -0.188, -0.148, -0.3, -0.112)
                .line_to_relative(-1.216, 0.488)
                .curve_to_relative(-0.254, -0.193, -0.524, -0.356, -0.824, -0.478)
                .line_to_relative(-0.183, -1.292)
                .curve_to_relative(-0.02, -0.122, -0.122, -0.209, -0.244, -0.209)
                .horizontal_line_to_relative(-1.953)
                .curve_to_relative(-0.122, 0.0, -0.219, 0.086, -0.239, 0.209)
                .line_to_relative(-0.183, 1.292)
                .curve_to_relative(-0.3, 0.122, -0.575, 0.29, -0.824, 0.478)
                .line_to_relative(-1.216, -0.488)
                .curve_to_relative(-0.112, -0.041, -0.239, 0.0, -0.3, 0.112)
                .line_to_relative(-0.972, 1.689)
                .curve_to_relative(-0.061, 0.107, -0.041, 0.239, 0.061, 0.31)
                .line_to_relative(1.033, 0.804)
                .curve_to_relative(-0.025, 0.153, -0.046, 0.32, -0.046, 0.478)
                .curve_to_relative(0.0, 0.158, 0.01, 0.326, 0.036, 0.478)
                .line_to(13.39, 7.559)
                .curve_to_relative(-0.092, 0.071, -0.117, 0.209, -0.061, 0.31)
                .line_to_relative(0.977, 1.689)
                .curve_to_relative(0.061, 0.112, 0.188, 0.148, 0.3, 0.112)
                .line_to_relative(1.216, -0.488)
                .curve_to_relative(0.254, 0.193, 0.524, 0.356, 0.824, 0.478)
                .line_to_relative(0.183, 1.292)
                .curve_to_relative(0.025, 0.122, 0.122, 0.209, 0.244, 0.209)
                .horizontal_line_to_relative(1.953)
                .curve_to_relative(0.122, 0.0, 0.224, -0.086, 0.239, -0.209)
                .line_to_relative(0.183, -1.292)
                .curve_to_relative(0.3, -0.122, 0.575, -0.285, 0.824, -0.478)
                .line_to_relative(1.216, 0.488)
                .curve_to_relative(0.112, 0.041, 0.239, 0.0, 0.3, -0.112)
                .line_to_relative(0.977, -1.689)
                .curve_to_relative(0.061, -0.112, 0.036, -0.239, -0.061, -0.31)
                .line_to(21.682, 6.755)
                .close()
                .move_to(18.05, 8.108)
                .curve_to_relative(-1.007, 0.0, -1.831, -0.824, -1.831, -1.831)
                .reflective_curve_to_relative(0.824, -1.831, 1.831, -1.831)
                .reflective_curve_to_relative(1.831, 0.824, 1.831, 1.831)
                .reflective_curve_to(19.057, 8.108, 18.05, 8.108)
                .close()
        })
        .build()
});

/// Icon for BYODA Plugin.
pub static IC_PLUGIN_BYODA: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginByoda", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for BYODA Plugin.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(16.941, 10.734)
                .curve_to_relative(-0.014, 3.375, -0.228, 6.749, -0.636, 10.124)
                .curve_to_relative(-0.042, 0.82, -0.522, 1.643, -1.842, 1.88)
                .curve_to_relative(-1.628, 0.082, -3.278, 0.082, -4.949, 0.0)
                .curve_to_relative(-1.29, -0.189, -1.344, -0.931, -1.556, -1.833)
                .curve_to_relative(-0.779, -3.312, -0.843, -6.732, -0.898, -10.137)
                .curve_to_relative(0.945, 1.64, 2.8, 2.394, 4.931, 2.394)
                .curve_to(14.137, 13.162, 16.002, 12.392, 16.941, 10.734)
                .close()
                .move_to(12.0, 1.2)
                .curve_to_relative(2.94, 0.0, 5.326, 2.386, 5.326, 5.325)
                .curve_to_relative(0.0, 2.939, -2.387, 5.326, -5.326, 5.326)
                .reflective_curve_to_relative(-5.326, -2.387, -5.326, -5.326)
                .reflective_curve_to(9.06, 1.2, 12.0, 1.2)
                .close()
        })
        .build()
});

/// Icon for Food Plugin.
pub static IC_PLUGIN_FOOD: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginFood", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Food Plugin.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(17.95, 22.795)
                .horizontal_line_to_relative(1.63)
                .curve_to_relative(0.825, 0.0, 1.502, -0.628, 1.6, -1.433)
                .line_to_relative(1.62, -16.18)
                .horizontal_line_to_relative(-4.909)
                .vertical_line_to(1.205)
                .horizontal_line_to_relative(-1.934)
                .vertical_line_to_relative(3.976)
                .horizontal_line_to_relative(-4.88)
                .line_to_relative(0.295, 2.297)
                .curve_to_relative(1.679, 0.461, 3.25, 1.296, 4.192, 2.219)
                .curve_to_relative(1.414, 1.394, 2.386, 2.837, 2.386, 5.194)
                .line_to(17.95, 22.795)
                .close()
                .move_to(1.2, 21.813)
                .vertical_line_to_relative(-0.972)
                .horizontal_line_to_relative(14.757)
                .vertical_line_to_relative(0.972)
                .curve_to_relative(0.0, 0.54, -0.442, 0.982, -0.992, 0.982)
                .horizontal_line_to(2.192)
                .curve_to(1.642, 22.795, 1.2, 22.353, 1.2, 21.813)
                .close()
                .move_to(15.957, 14.941)
                .curve_to_relative(0.0, -7.855, -14.757, -7.855, -14.757, 0.0)
                .horizontal_line_to(15.957)
                .close()
                .move_to(1.22, 16.914)
                .horizontal_line_to_relative(14.727)
                .vertical_line_to_relative(1.964)
                .horizontal_line_to(1.22)
                .line_to(1.22, 16.914)
                .close()
        })
        .build()
});

/// Icon for Glimp Plugin.
pub static IC_PLUGIN_GLIMP: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginGlimp", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Glimp Plugin.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(14.633, 15.754)
                .line_to_relative(-0.574, 2.029)
                .curve_to_relative(-0.067, 0.235, -0.282, 0.395, -0.526, 0.392)
                .curve_to_relative(-0.243, -0.004, -0.454, -0.171, -0.513, -0.408)
                .line_to_relative(-0.697, -2.789)
                .line_to_relative(-0.567, 2.276)
                .curve_to_relative(0.64, 2.58, 2.965, 4.492, 5.735, 4.492)
                .curve_to_relative(2.331, 0.0, 4.346, -1.354, 5.308, -3.32)
                .vertical_line_to_relative(-2.671)
                .horizontal_line_to(14.633)
                .close()
                .move_to(12.844, 12.624)
                .line_to_relative(0.73, 2.922)
                .line_to_relative(0.136, -0.479)
                .curve_to_relative(0.066, -0.232, 0.277, -0.392, 0.517, -0.392)
                .horizontal_line_to(22.8)
                .vertical_line_to_relative(-1.56)
                .curve_to_relative(-1.195, -3.18, -3.877, -6.988, -5.308, -8.423)
                .curve_to_relative(-1.341, 1.345, -3.666, 4.604, -4.965, 7.566)
                .curve_to(12.681, 12.323, 12.801, 12.455, 12.844, 12.624)
                .close()
                .move_to(12.527, 12.259)
                .curve_to_relative(-0.064, -0.026, -0.133, -0.042, -0.205, -0.042)
                .curve_to_relative(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
                .curve_to_relative(-0.247, 0.0, -0.462, 0.169, -0.521, 0.409)
                .line_to_relative(-1.32, 5.301)
                .line_to(8.52, 10.134)
                .curve_to_relative(-0.06, -0.239, -0.275, -0.407, -0.521, -0.407)
                .curve_to_relative(0.0, 0.0, -0.001, 0.0, -0.001, 0.0)
                .curve_to_relative(-0.247, 0.001, -0.461, 0.169, -0.521, 0.409)
                .line_to_relative(-1.325, 5.36)
                .line_to_relative(-0.724, -2.873)
                .curve_to_relative(-0.06, -0.239, -0.275, -0.407, -0.521, -0.407)
                .curve_to_relative(-0.002, 0.0, -0.003, 0.0, -0.005, 0.0)
                .curve_to_relative(-0.248, 0.002, -0.462, 0.175, -0.518, 0.417)
                .line_to_relative(-0.474, 2.042)
                .horizontal_line_to(1.2)
                .vertical_line_to_relative(1.078)
                .horizontal_line_to_relative(3.135)
                .curve_to_relative(0.25, 0.0, 0.467, -0.173, 0.524, -0.417)
                .line_to_relative(0.069, -0.296)
                .line_to_relative(0.708, 2.807)
                .curve_to_relative(0.06, 0.239, 0.275, 0.407, 0.521, 0.407)
                .curve_to_relative(0.0, 0.0, 0.001, 0.0, 0.001, 0.0)
                .curve_to_relative(0.247, -0.001, 0.461, -0.169, 0.521, -0.409)
                .line_to_relative(1.325, -5.358)
                .line_to_relative(1.959, 7.784)
                .curve_to_relative(0.06, 0.239, 0.275, 0.407, 0.521, 0.407)
                .curve_to_relative(0.0, 0.0, 0.0, 0.0, 0.001, 0.0)
                .curve_to_relative(0.246, 0.0, 0.461, -0.169, 0.521, -0.409)
                .line_to_relative(0.751, -3.018)
                .curve_to_relative(-0.114, -0.46, -0.176, -0.941, -0.176, -1.436)
                .curve_to(11.581, 14.815, 11.955, 13.565, 12.527, 12.259)
                .close()
                .move_to(14.614, 5.812)
                .curve_to_relative(-0.083, -0.232, -0.206, -0.412, -0.37, -0.54)
                .curve_to_relative(-0.163, -0.127, -0.351, -0.191, -0.565, -0.191)
                .curve_to_relative(-0.163, 0.0, -0.302, 0.037, -0.417, 0.111)
                .curve_to_relative(-0.114, 0.074, -0.217, 0.185, -0.308, 0.332)
                .vertical_line_to(5.147)
                .horizontal_line_to_relative(-0.386)
                .vertical_line_to_relative(4.015)
                .horizontal_line_to_relative(0.424)
                .vertical_line_to(7.749)
                .curve_to_relative(0.072, 0.106, 0.165, 0.193, 0.277, 0.262)
                .curve_to_relative(0.112, 0.069, 0.239, 0.104, 0.38, 0.104)
                .curve_to_relative(0.193, 0.0, 0.377, -0.063, 0.552, -0.19)
                .curve_to_relative(0.175, -0.127, 0.308, -0.309, 0.4, -0.547)
                .curve_to_relative(0.092, -0.238, 0.138, -0.506, 0.138, -0.802)
                .curve_to(14.739, 6.299, 14.697, 6.045, 14.614, 5.812)
                .close()
                .move_to(14.105, 7.433)
                .curve_to_relative(-0.134, 0.185, -0.295, 0.278, -0.484, 0.278)
                .curve_to_relative(-0.185, 0.0, -0.343, -0.089, -0.473, -0.268)
                .curve_to_relative(-0.13, -0.178, -0.195, -0.454, -0.195, -0.828)
                .curve_to_relative(0.0, -0.373, 0.069, -0.658, 0.208, -0.854)
                .curve_to(13.3, 5.565, 13.46, 5.467, 13.64, 5.467)
                .curve_to_relative(0.182, 0.0, 0.339, 0.092, 0.47, 0.276)
                .curve_to_relative(0.131, 0.184, 0.196, 0.461, 0.196, 0.831)
                .curve_to(14.306, 6.962, 14.239, 7.248, 14.105, 7.433)
                .close()
                .move_to(11.169, 5.081)
                .curve_to_relative(-0.317, 0.0, -0.574, 0.169, -0.772, 0.508)
                .curve_to_relative(-0.049, -0.16, -0.132, -0.285, -0.251, -0.374)
                .curve_to_relative(-0.118, -0.089, -0.27, -0.134, -0.455, -0.134)
                .curve_to_relative(-0.166, 0.0, -0.315, 0.043, -0.445, 0.13)
                .curve_to_relative(-0.13, 0.086, -0.235, 0.201, -0.313, 0.343)
                .vertical_line_to(5.147)
                .horizontal_line_to(8.554)
                .vertical_line_to(8.05)
                .horizontal_line_to_relative(0.424)
                .vertical_line_to(6.543)
                .curve_to_relative(0.0, -0.264, 0.023, -0.466, 0.069, -0.607)
                .curve_to_relative(0.045, -0.14, 0.119, -0.247, 0.22, -0.32)
                .curve_to_relative(0.101, -0.073, 0.212, -0.109, 0.331, -0.109)
                .curve_to_relative(0.157, 0.0, 0.27, 0.055, 0.339, 0.164)
                .curve_to_relative(0.069, 0.109, 0.103, 0.273, 0.103, 0.492)
                .vertical_line_to(8.05)
                .horizontal_line_to_relative(0.424)
                .vertical_line_to(6.363)
                .curve_to_relative(0.0, -0.299, 0.058, -0.516, 0.174, -0.652)
                .curve_to_relative(0.116, -0.136, 0.262, -0.204, 0.438, -0.204)
                .curve_to_relative(0.097, 0.0, 0.182, 0.026, 0.254, 0.079)
                .curve_to_relative(0.072, 0.053, 0.122, 0.122, 0.149, 0.209)
                .curve_to_relative(0.028, 0.086, 0.041, 0.228, 0.041, 0.425)
                .vertical_line_to(8.05)
                .horizontal_line_to_relative(0.421)
                .vertical_line_to(6.057)
                .curve_to_relative(0.0, -0.332, -0.067, -0.577, -0.2, -0.737)
                .curve_to(11.608, 5.161, 11.417, 5.081, 11.169, 5.081)
                .close()
                .move_to(7.486, 5.147)
                .horizontal_line_to_relative(0.424)
                .vertical_line_to_relative(2.903)
                .horizontal_line_to(7.486)
                .vertical_line_to(5.147)
                .close()
                .move_to(6.403, 4.043)
                .horizontal_line_to_relative(0.424)
                .vertical_line_to_relative(4.007)
                .horizontal_line_to(6.403)
                .vertical_line_to(4.043)
                .close()
                .move_to(7.486, 4.043)
                .horizontal_line_to_relative(0.424)
                .vertical_line_to_relative(0.566)
                .horizontal_line_to(7.486)
                .vertical_line_to(4.043)
                .close()
                .move_to(4.332, 6.478)
                .horizontal_line_to_relative(1.014)
                .vertical_line_to_relative(0.746)
                .curve_to_relative(-0.097, 0.1, -0.24, 0.195, -0.428, 0.283)
                .curve_to(4.73, 7.596, 4.537, 7.64, 4.34, 7.64)
                .curve_to_relative(-0.228, 0.0, -0.442, -0.058, -0.645, -0.175)
                .curve_to(3.492, 7.348, 3.338, 7.169, 3.232, 6.929)
                .curve_to(3.126, 6.689, 3.074, 6.39, 3.074, 6.033)
                .curve_to_relative(0.0, -0.29, 0.044, -0.558, 0.132, -0.806)
                .curve_to(3.257, 5.082, 3.33, 4.95, 3.423, 4.83)
                .curve_to_relative(0.093, -0.12, 0.216, -0.218, 0.368, -0.291)
                .curve_to_relative(0.152, -0.073, 0.333, -0.111, 0.541, -0.111)
                .curve_to_relative(0.174, 0.0, 0.333, 0.035, 0.475, 0.105)
                .curve_to_relative(0.143, 0.07, 0.253, 0.164, 0.33, 0.28)
                .curve_to(5.214, 4.93, 5.279, 5.09, 5.33, 5.294)
                .line_to_relative(0.412, -0.131)
                .curve_to(5.683, 4.894, 5.595, 4.675, 5.481, 4.507)
                .curve_to(5.367, 4.34, 5.208, 4.209, 5.007, 4.115)
                .curve_to(4.805, 4.021, 4.58, 3.974, 4.33, 3.974)
                .curve_to_relative(-0.344, 0.0, -0.647, 0.082, -0.91, 0.246)
                .curve_to(3.156, 4.384, 2.954, 4.635, 2.813, 4.973)
                .curve_to_relative(-0.14, 0.338, -0.21, 0.702, -0.21, 1.092)
                .curve_to_relative(0.0, 0.393, 0.07, 0.75, 0.212, 1.069)
                .curve_to_relative(0.141, 0.319, 0.35, 0.563, 0.627, 0.731)
                .curve_to_relative(0.277, 0.168, 0.585, 0.253, 0.923, 0.253)
                .curve_to_relative(0.251, 0.0, 0.496, -0.053, 0.734, -0.157)
                .curve_to(5.338, 7.856, 5.57, 7.7, 5.794, 7.492)
                .vertical_line_to(6.005)
                .line_to(4.332, 6.008)
                .vertical_line_to(6.478)
                .close()
                .move_to(18.898, 1.625)
                .curve_to_relative(1.917, 0.0, 3.476, 1.56, 3.476, 3.476)
                .vertical_line_to_relative(13.796)
                .curve_to_relative(0.0, 1.917, -1.56, 3.476, -3.476, 3.476)
                .horizontal_line_to(5.102)
                .curve_to_relative(-1.917, 0.0, -3.476, -1.56, -3.476, -3.476)
                .vertical_line_to(5.102)
                .curve_to_relative(0.0, -1.917, 1.56, -3.476, 3.476, -3.476)
                .horizontal_line_to(18.898)
                .close()
                .move_to(18.898, 1.2)
                .horizontal_line_to(5.102)
                .curve_to(2.947, 1.2, 1.2, 2.947, 1.2, 5.102)
                .vertical_line_to_relative(13.796)
                .curve_to_relative(0.0, 2.155, 1.747, 3.902, 3.902, 3.902)
                .horizontal_line_to_relative(13.796)
                .curve_to_relative(2.155, 0.0, 3.902, -1.747, 3.902, -3.902)
                .vertical_line_to(5.102)
                .curve_to(22.8, 2.947, 21.053, 1.2, 18.898, 1.2)
                .line_to(18.898, 1.2)
                .close()
        })
        .build()
});

/// Icon for SMS Plugin.
pub static IC_PLUGIN_SMS: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginSms", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for SMS Plugin.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(20.64, 1.2)
                .horizontal_line_to(3.36)
                .curve_to_relative(-1.188, 0.0, -2.149, 0.972, -2.149, 2.16)
                .line_to(1.2, 22.8)
                .line_to_relative(4.32, -4.32)
                .horizontal_line_to_relative(15.12)
                .curve_to_relative(1.188, 0.0, 2.16, -0.972, 2.16, -2.16)
                .vertical_line_to(3.36)
                .curve_to(22.8, 2.172, 21.828, 1.2, 20.64, 1.2)
                .close()
                .move_to(8.76, 10.92)
                .horizontal_line_to(6.6)
                .vertical_line_to(8.76)
                .horizontal_line_to_relative(2.16)
                .vertical_line_to(10.92)
                .close()
                .move_to(13.08, 10.92)
                .horizontal_line_to_relative(-2.16)
                .vertical_line_to(8.76)
                .horizontal_line_to_relative(2.16)
                .vertical_line_to(10.92)
                .close()
                .move_to(17.4, 10.92)
                .horizontal_line_to_relative(-2.16)
                .vertical_line_to(8.76)
                .horizontal_line_to_relative(2.16)
                .vertical_line_to(10.92)
                .close()
        })
        .build()
});

/// Icon for Tomato Plugin.
pub static IC_PLUGIN_TOMATO: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginTomato", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Tomato Plugin.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(12.0, 1.2)
                .curve_to_relative(5.961, 0.0, 10.8, 4.839, 10.8, 10.8)
                .curve_to_relative(0.0, 5.961, -4.839, 10.8, -10.8, 10.8)
                .curve_to(6.039, 22.8, 1.2, 17.961, 1.2, 12.0)
                .curve_to(1.2, 6.039, 6.039, 1.2, 12.0, 1.2)
                .close()
                .move_to(21.058, 11.86)
                .curve_to_relative(0.0, -0.024, 0.0, -0.049, 0.0, -0.072)
                .curve_to_relative(0.0, -5.055, -4.112, -9.158, -9.176, -9.158)
                .curve_to_relative(-5.064, 0.0, -9.175, 4.104, -9.175, 9.158)
                .curve_to_relative(0.0, 5.054, 4.111, 9.158, 9.175, 9.158)
                .line_to_relative(0.059, 0.0)
                .curve_to_relative(0.02, 0.0, 0.04, 0.0, 0.059, 0.0)
                .curve_to_relative(4.999, 0.0, 9.058, -4.039, 9.058, -9.014)
                .curve_to(21.059, 11.908, 21.059, 11.884, 21.058, 11.86)
                .close()
                .move_to(12.0, 1.821)
                .curve_to_relative(4.817, 0.0, 8.728, 3.957, 8.728, 8.831)
                .curve_to_relative(0.0, 4.874, -3.911, 8.831, -8.728, 8.831)
                .curve_to_relative(-4.817, 0.0, -8.728, -3.957, -8.728, -8.831)
                .curve_to(3.272, 5.778, 7.183, 1.821, 12.0, 1.821)
                .close()
                .move_to(11.028, 11.086)
                .curve_to_relative(0.0, 0.006, 0.0, 0.011, 0.0, 0.017)
                .curve_to(11.028, 11.598, 11.464, 12.0, 12.0, 12.0)
                .curve_to_relative(0.536, 0.0, 0.972, -0.402, 0.972, -0.897)
                .vertical_line_to_relative(-0.018)
                .curve_to_relative(0.0, -0.005, 0.0, -0.011, 0.0, -0.017)
                .curve_to_relative(0.0, -0.476, -0.435, -0.863, -0.972, -0.863)
                .curve_to_relative(-0.536, 0.0, -0.972, 0.387, -0.972, 0.863)
                .vertical_line_to(11.086)
                .close()
        })
        .build()
});

/// Settings gear icon with diagonal strikethrough line.
pub static IC_SETTINGS_OFF: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcSettingsOff", 24.0, 24.0, 24.0, 24.0)
        .description("Settings gear icon with diagonal strikethrough line.")
        .path(PathStyle::new().fill(Color::BLACK).fill_type(PathFillType::EvenOdd), |p| {
            p.move_to(19.14, 12.94)
                .curve_to_relative(0.04, -0.3, 0.06, -0.61, 0.06, -0.94)
                .curve_to_relative(0.0, -0.32, -0.02, -0.64, -0.07, -0.94)
                .line_to_relative(2.03, -1.58)
                .curve_to_relative(0.18, -0.14, 0.23, -0.41, 0.12, -0.61)
                .line_to_relative(-1.92, -3.32)
                .curve_to_relative(-0.12, -0.22, -0.37, -0.29, -0.59, -0.22)
                .line_to_relative(-2.39, 0.96)
                .curve_to_relative(-0.5, -0.38, -1.03, -0.7, -1.62, -0.94)
                .line_to_relative(-0.36, -2.54)
                .curve_to_relative(-0.04, -0.24, -0.24, -0.41, -0.48, -0.41)
                .horizontal_line_to_relative(-3.84)
                .curve_to_relative(-0.24, 0.0, -0.43, 0.17, -0.47, 0.41)
                .line_to_relative(-0.36, 2.54)
                .curve_to_relative(-0.59, 0.24, -1.13, 0.57, -1.62, 0.94)
                .line_to_relative(-2.39, -0.96)
                .curve_to_relative(-0.22, -0.08, -0.47, 0.0, -0.59, 0.22)
                .line_to_relative(-1.92, 3.32)
                .curve_to_relative(-0.12, 0.22, -0.07, 0.47, 0.12, 0.61)
                .line_to_relative(2.03, 1.58)
                .curve_to_relative(-0.05, 0.3, -0.09, 0.63, -0.09, 0.94)
                .curve_to_relative(0.0, 0.31, 0.02, 0.64, 0.07, 0.94)
                .line_to_relative(-2.03, 1.58)
                .curve_to_relative(-0.18, 0.14, -0.23, 0.41, -0.12, 0.61)
                .line_to_relative(1.92, 3.32)
                .curve_to_relative(0.12, 0.22, 0.37, 0.29, 0.59, 0.22)
                .line_to_relative(2.39, -0.96)
                .curve_to_relative(0.5, 0.38, 1.03, 0.7, 1.62, 0.94)
                .line_to_relative(0.36, 2.54)
                .curve_to_relative(0.05, 0.24, 0.24, 0.41, 0.48, 0.41)
                .horizontal_line_to_relative(3.84)
                .curve_to_relative(0.24, 0.0, 0.44, -0.17, 0.47, -0.41)
                .line_to_relative(0.36, -2.54)
                .curve_to_relative(0.59, -0.24, 1.13, -0.56, 1.62, -0.94)
                .line_to_relative(2.39, 0.96)
                .curve_to_relative(0.22, 0.08, 0.47, 0.0, 0.59, -0.22)
                .line_to_relative(1.92, -3.32)
                .curve_to_relative(0.12, -0.22, 0.07, -0.47, -0.12, -0.61)
                .line_to_relative(-2.01, -1.58)
                .close()
                .move_to(12.0, 15.6)
                .curve_to_relative(-1.98, 0.0, -3.6, -1.62, -3.6, -3.6)
                .curve_to_relative(0.0, -1.98, 1.62, -3.6, 3.6, -3.6)
                .curve_to_relative(1.98, 0.0, 3.6, 1.62, 3.6, 3.6)
                .curve_to_relative(0.0, 1.98, -1.62, 3.6, -3.6, 3.6)
                .close()
        })
        .path(PathStyle::new().stroke(Color::BLACK, 2.0).stroke_cap(StrokeCap::Round), |p| {
            p.move_to(4.5, 20.5)
                .line_to(20.5, 4.5)
        })
        .build()
});

/// Icon for SMB (Super Micro Bolus).
pub static IC_SMB: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcSmb", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for SMB (Super Micro Bolus).")
        .path(PathStyle::new().fill(Color::from_argb(0xFF1E88E5)), |p| {
            p.move_to(15.478, 6.931)
                .curve_to(14.897, 4.642, 12.501, 1.2, 12.001, 1.2)
                .curve_to_relative(-0.5, 0.0, -2.904, 3.449, -3.482, 5.734)
                .curve_to_relative(-0.387, 1.528, 0.103, 2.839, 1.454, 3.731)
                .curve_to_relative(1.318, 0.87, 2.739, 0.856, 4.056, -0.012)
                .curve_to(15.382, 9.76, 15.869, 8.47, 15.478, 6.931)
                .close()
                .move_to(13.351, 9.623)
                .curve_to_relative(-0.457, 0.302, -0.916, 0.455, -1.365, 0.455)
                .curve_to_relative(-0.441, 0.0, -0.889, -0.149, -1.335, -0.442)
                .curve_to_relative(-0.903, -0.597, -1.201, -1.36, -0.938, -2.4)
                .curve_to_relative(0.364, -1.438, 1.536, -3.342, 2.287, -4.335)
                .curve_to_relative(0.749, 0.992, 1.917, 2.894, 2.283, 4.333)
                .curve_to(14.547, 8.271, 14.25, 9.03, 13.351, 9.623)
                .close()
                .move_to(15.478, 18.42)
                .curve_to_relative(-0.581, -2.289, -2.977, -5.731, -3.477, -5.731)
                .curve_to_relative(-0.5, 0.0, -2.904, 3.449, -3.482, 5.734)
                .curve_to_relative(-0.387, 1.528, 0.103, 2.839, 1.454, 3.731)
                .curve_to_relative(1.318, 0.87, 2.739, 0.856, 4.056, -0.012)
                .curve_to(15.382, 21.25, 15.869, 19.96, 15.478, 18.42)
                .close()
                .move_to(13.351, 21.113)
                .curve_to_relative(-0.457, 0.302, -0.916, 0.455, -1.365, 0.455)
                .curve_to_relative(-0.441, 0.0, -0.889, -0.149, -1.335, -0.442)
                .curve_to_relative(-0.903, -0.597, -1.201, -1.36, -0.938, -2.4)
                .curve_to_relative(0.364, -1.438, 1.536, -3.342, 2.287, -4.335)
                .curve_to_relative(0.749, 0.992, 1.917, 2.894, 2.283, 4.333)
                .curve_to(14.547, 19.761, 14.25, 20.519, 13.351, 21.113)
                .close()
        })
        .build()
});

/// Icon for xDrip+ CGM source.
pub static X_DRIP: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("XDrip", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for xDrip+ CGM source.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(12.143, 3.619)
                .curve_to_relative(1.326, 1.335, 2.613, 2.639, 3.908, 3.934)
                .curve_to_relative(0.86, 0.86, 1.735, 1.695, 2.294, 2.811)
                .curve_to_relative(1.242, 2.477, 0.847, 5.53, -1.039, 7.698)
                .curve_to_relative(-1.763, 2.026, -4.813, 2.845, -7.35, 1.973)
                .curve_to_relative(-4.996, -1.716, -6.424, -7.776, -2.71, -11.543)
                .curve_to(8.837, 6.878, 10.458, 5.294, 12.143, 3.619)
                .close()
                .move_to(12.08, 6.135)
                .curve_to_relative(-1.258, 1.251, -2.447, 2.427, -3.628, 3.61)
                .curve_to_relative(-1.148, 1.149, -1.65, 2.542, -1.541, 4.158)
                .curve_to_relative(0.177, 2.618, 2.665, 4.888, 5.169, 4.688)
                .curve_to(12.08, 14.471, 12.08, 10.35, 12.08, 6.135)
                .close()
        })
        .build()
});
