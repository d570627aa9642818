//! Treatment, trend-arrow, plugin and body-silhouette icons.
//!
//! Converted from the AAPS vector drawables

use std::sync::LazyLock;

use aaps_vector::{Color, IconDefinition, PathStyle};

use crate::zone::BodyZone;

/// Icon for Child Back View.
pub static CHILD_BACK: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("ChildBack", 48.0, 128.0, 48.0, 128.0)
        .description("Icon for Child Back View.")
        .path(
            PathStyle::new()
                .named("background")
                .fill(Color::from_argb(0xFFEFC3AD))
                .stroke(Color::BLACK, 0.5669)
                .stroke_miter(10.0),
            |p| {
                p.move_to(36.66, 44.223)
                    .curve_to_relative(-0.037, -0.298, -0.088, -0.595, -0.09, -0.897)
                    .curve_to_relative(-0.006, -1.129, 0.069, -2.266, -0.028, -3.387)
                    .curve_to_relative(-0.164, -1.895, -0.068, -2.946, -0.143, -4.839)
                    .curve_to_relative(-0.019, -0.495, -0.182, -1.83, -0.286, -2.319)
                    .curve_to_relative(-0.363, -1.702, -0.514, -2.971, -0.67, -4.87)
                    .curve_to_relative(-0.019, -0.226, -0.093, -0.742, -0.093, -1.669)
                    .curve_to_relative(0.0, -0.755, -0.089, -1.574, -0.158, -2.331)
                    .curve_to_relative(-0.063, -0.695, -0.145, -1.352, -0.397, -1.985)
                    .curve_to_relative(-0.356, -0.895, -0.991, -2.33, -2.518, -2.916)
                    .curve_to_relative(-1.476, -0.567, -3.678, -1.398, -4.928, -2.228)
                    .curve_to_relative(-1.381, -0.917, -1.481, -2.139, -0.603, -3.017)
                    .curve_to_relative(1.387, -1.387, 1.945, -3.67, 2.179, -4.662)
                    .curve_to_relative(0.516, -0.308, 0.626, -2.731, 0.085, -2.684)
                    .curve_to_relative(-0.12, -0.798, 0.029, -3.375, -2.558, -4.745)
                    .curve_to_relative(-1.712, -0.907, -3.574, -0.904, -4.976, -0.016)
                    .curve_to_relative(-1.855, 1.175, -2.361, 3.863, -2.431, 4.761)
                    .curve_to_relative(-0.543, -0.115, -0.295, 2.576, 0.255, 2.683)
                    .curve_to_relative(0.0, 1.014, 0.576, 3.116, 2.113, 4.654)
                    .curve_to_relative(0.947, 0.947, 1.143, 2.101, -0.772, 3.32)
                    .curve_to_relative(-0.952, 0.606, -2.111, 1.109, -3.184, 1.459)
                    .curve_to_relative(-0.809, 0.264, -1.667, 0.604, -2.427, 1.015)
                    .curve_to_relative(-0.971, 0.524, -1.274, 1.306, -1.606, 2.391)
                    .curve_to_relative(-0.311, 1.016, -0.447, 2.276, -0.625, 4.826)
                    .curve_to_relative(-0.22, 1.525, -0.443, 3.56, -0.8, 5.722)
                    .curve_to_relative(-0.12, 0.727, -0.41, 2.547, -0.402, 3.284)
                    .curve_to_relative(0.015, 1.266, 0.043, 1.891, -0.017, 3.154)
                    .curve_to_relative(-0.04, 0.85, -0.068, 1.707, -0.233, 2.549)
                    .curve_to_relative(-0.024, 0.123, -0.058, 0.259, -0.029, 0.375)
                    .curve_to_relative(0.325, 1.289, -0.031, 2.546, -0.155, 3.815)
                    .curve_to_relative(-0.048, 0.488, 0.158, 0.937, 0.284, 1.396)
                    .curve_to_relative(0.367, 1.342, 1.237, 2.217, 2.515, 2.717)
                    .curve_to_relative(0.141, 0.055, 0.287, 0.168, 0.423, 0.059)
                    .curve_to_relative(0.159, -0.128, 0.116, -0.319, 0.054, -0.49)
                    .curve_to_relative(-0.098, -0.269, -0.246, -0.515, -0.511, -0.635)
                    .curve_to_relative(-0.399, -0.18, -0.574, -0.535, -0.602, -0.903)
                    .curve_to_relative(-0.041, -0.529, -0.319, -1.081, 0.046, -1.602)
                    .curve_to_relative(0.07, -0.099, 0.108, -0.249, 0.269, -0.215)
                    .curve_to_relative(0.134, 0.028, 0.21, 0.144, 0.234, 0.27)
                    .curve_to_relative(0.06, 0.321, 0.146, 0.644, 0.146, 0.966)
                    .curve_to_relative(0.0, 0.331, 0.141, 0.577, 0.311, 0.83)
                    .curve_to_relative(0.101, 0.15, 0.189, 0.333, 0.403, 0.253)
                    .curve_to_relative(0.188, -0.071, 0.226, -0.26, 0.215, -0.447)
                    .curve_to_relative(-0.06, -1.107, -0.112, -2.214, -0.194, -3.319)
                    .curve_to_relative(-0.016, -0.214, -0.117, -0.451, -0.25, -0.623)
                    .curve_to_relative(-0.466, -0.606, -0.546, -1.346, -0.731, -2.044)
                    .curve_to_relative(-0.105, -0.397, 0.106, -0.786, 0.219, -1.169)
                    .curve_to_relative(0.364, -1.228, 0.747, -2.451, 1.096, -3.683)
                    .curve_to_relative(0.391, -1.379, 0.621, -2.787, 0.797, -4.21)
                    .curve_to_relative(0.206, -1.672, 0.681, -5.019, 0.81, -5.019)
                    .curve_to_relative(0.144, 0.0, 0.293, 3.729, 0.293, 4.936)
                    .curve_to_relative(0.0, 2.592, -0.144, 5.124, -0.526, 8.078)
                    .curve_to_relative(-0.124, 0.957, -0.387, 3.038, -0.309, 5.405)
                    .curve_to_relative(0.145, 4.443, 0.103, 7.797, 0.776, 11.712)
                    .curve_to_relative(0.457, 1.635, 0.214, 3.31, 0.299, 4.967)
                    .curve_to_relative(0.063, 1.224, -0.141, 2.412, -0.348, 3.603)
                    .curve_to_relative(-0.222, 1.281, -0.134, 2.557, -0.036, 3.842)
                    .curve_to_relative(0.082, 1.08, 0.254, 2.147, 0.356, 3.222)
                    .curve_to_relative(0.09, 0.952, 0.303, 1.881, 0.424, 2.827)
                    .curve_to_relative(0.125, 0.977, 0.381, 1.936, 0.477, 2.918)
                    .curve_to_relative(0.019, 0.552, -0.353, 1.273, -0.976, 1.704)
                    .curve_to_relative(-0.794, 0.549, -1.608, 1.059, -2.551, 1.321)
                    .curve_to_relative(-0.22, 0.061, -0.447, 0.122, -0.644, 0.23)
                    .curve_to_relative(-0.175, 0.096, -0.34, 0.248, -0.307, 0.489)
                    .curve_to_relative(0.034, 0.245, 0.224, 0.292, 0.434, 0.356)
                    .curve_to_relative(0.524, 0.159, 1.064, 0.094, 1.591, 0.16)
                    .curve_to_relative(1.364, 0.171, 2.734, 0.234, 4.104, 0.276)
                    .curve_to_relative(0.926, 0.029, 1.32, -0.431, 1.38, -1.348)
                    .curve_to_relative(0.046, -0.698, -0.215, -1.362, -0.188, -2.051)
                    .curve_to_relative(0.015, -0.379, 0.01, -0.795, -0.041, -1.137)
                    .curve_to_relative(-0.183, -0.949, -0.161, -1.944, 0.025, -2.887)
                    .curve_to_relative(0.339, -1.722, 0.811, -3.427, 0.967, -5.175)
                    .curve_to_relative(0.129, -1.444, -0.084, -2.863, -0.084, -4.354)
                    .curve_to_relative(0.0, -1.415, 0.001, -2.327, 0.201, -3.453)
                    .curve_to_relative(0.204, -1.149, 0.347, -1.879, 0.449, -3.053)
                    .curve_to_relative(0.065, -0.756, 0.285, -1.613, 0.273, -2.372)
                    .curve_to_relative(-0.024, -1.595, 0.308, -3.151, 0.531, -4.717)
                    .curve_to_relative(0.197, -1.39, 0.02, -0.299, 0.255, -1.683)
                    .curve_to_relative(0.05, -0.297, 0.106, -0.594, 0.17, -0.888)
                    .curve_to_relative(0.028, -0.126, 0.106, -0.243, 0.238, -0.269)
                    .curve_to_relative(0.183, -0.037, 0.273, 0.105, 0.339, 0.242)
                    .curve_to_relative(0.076, 0.158, 0.14, 0.317, 0.162, 0.5)
                    .curve_to_relative(0.215, 1.819, 0.143, 1.065, 0.32, 2.886)
                    .curve_to_relative(0.16, 1.646, 0.177, 3.305, 0.342, 4.971)
                    .curve_to_relative(0.171, 1.731, 0.39, 3.05, 0.762, 4.734)
                    .curve_to_relative(0.302, 1.367, 0.351, 2.283, 0.355, 3.632)
                    .curve_to_relative(0.004, 1.224, -0.098, 2.608, 0.036, 3.85)
                    .curve_to_relative(0.197, 1.83, 0.559, 3.435, 0.754, 5.251)
                    .curve_to_relative(0.099, 0.923, 0.111, 1.827, 0.032, 2.784)
                    .curve_to_relative(-0.088, 0.989, -0.217, 1.975, -0.3, 3.087)
                    .curve_to_relative(-0.009, 0.126, -0.018, 0.258, 0.004, 0.383)
                    .curve_to_relative(0.08, 0.453, 0.342, 0.806, 0.832, 0.961)
                    .curve_to_relative(0.381, 0.12, 0.773, 0.184, 1.129, 0.091)
                    .curve_to_relative(0.635, -0.167, 1.268, -0.092, 1.902, -0.125)
                    .curve_to_relative(1.065, -0.055, 2.127, -0.143, 3.183, -0.298)
                    .curve_to_relative(0.245, -0.036, 0.487, -0.073, 0.501, -0.36)
                    .curve_to_relative(0.013, -0.263, -0.088, -0.519, -0.4, -0.562)
                    .curve_to_relative(-0.867, -0.12, -1.539, -0.659, -2.267, -1.063)
                    .curve_to_relative(-0.763, -0.424, -1.794, -0.91, -1.856, -1.906)
                    .curve_to_relative(-0.004, -0.063, 0.012, -0.148, 0.01, -0.207)
                    .curve_to_relative(0.013, -0.084, 0.028, -0.167, 0.045, -0.251)
                    .curve_to_relative(0.497, -2.361, 0.842, -4.747, 1.138, -7.136)
                    .curve_to_relative(0.109, -0.884, 0.099, -1.806, 0.099, -2.709)
                    .curve_to_relative(0.0, -1.73, -0.155, -2.962, -0.329, -4.614)
                    .curve_to_relative(-0.034, -0.323, -0.033, -0.656, -0.035, -0.985)
                    .curve_to_relative(-0.003, -0.861, 0.032, -1.724, -0.008, -2.584)
                    .curve_to_relative(-0.05, -1.067, 0.081, -2.109, 0.301, -3.146)
                    .curve_to_relative(0.948, -4.488, 0.899, -9.829, 0.899, -12.62)
                    .curve_to_relative(0.0, -1.45, -0.108, -2.876, -0.224, -4.692)
                    .curve_to_relative(-0.121, -1.892, -0.369, -3.901, -0.526, -5.844)
                    .curve_to_relative(-0.059, -0.728, -0.082, -1.927, -0.093, -2.659)
                    .curve_to_relative(0.031, -0.859, 0.294, -3.13, 0.37, -3.702)
                    .curve_to_relative(0.015, -0.111, 0.055, -0.297, 0.162, -0.337)
                    .curve_to_relative(0.082, 0.082, 0.089, 0.246, 0.095, 0.325)
                    .curve_to_relative(0.051, 0.732, 0.199, 1.214, 0.198, 1.848)
                    .curve_to_relative(-0.004, 1.415, 0.282, 2.798, 0.529, 4.181)
                    .curve_to_relative(0.406, 2.277, 1.067, 4.494, 1.666, 6.726)
                    .curve_to_relative(0.192, 0.715, 0.156, 1.454, -0.166, 2.148)
                    .curve_to_relative(-0.241, 0.52, -0.496, 1.033, -0.733, 1.554)
                    .curve_to_relative(-0.05, 0.11, -0.069, 0.242, -0.07, 0.364)
                    .curve_to_relative(-0.01, 0.887, -0.012, 1.773, -0.014, 2.66)
                    .curve_to_relative(0.0, 0.148, -0.021, 0.32, 0.176, 0.37)
                    .curve_to_relative(0.167, 0.042, 0.282, -0.066, 0.401, -0.164)
                    .curve_to_relative(0.396, -0.323, 0.37, -0.805, 0.468, -1.237)
                    .curve_to_relative(0.033, -0.145, 0.003, -0.303, 0.01, -0.455)
                    .curve_to_relative(0.009, -0.197, -0.018, -0.464, 0.258, -0.451)
                    .curve_to_relative(0.206, 0.01, 0.347, 0.227, 0.354, 0.44)
                    .curve_to_relative(0.029, 0.88, 0.167, 1.798, -0.727, 2.404)
                    .curve_to_relative(-0.124, 0.084, -0.23, 0.202, -0.324, 0.32)
                    .curve_to_relative(-0.116, 0.146, -0.373, 0.258, -0.229, 0.499)
                    .curve_to_relative(0.166, 0.277, 0.427, 0.215, 0.673, 0.109)
                    .curve_to_relative(1.342, -0.578, 2.153, -1.594, 2.584, -2.985)
                    .curve_to(36.981, 45.838, 36.759, 45.037, 36.66, 44.223)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::BackLeftUpperArm.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(15.544, 30.688)
                    .curve_to_relative(-0.175, 1.144, -0.537, 1.603, -0.905, 1.559)
                    .curve_to_relative(-0.433, -0.051, -0.808, -0.149, -1.191, -0.212)
                    .curve_to_relative(-0.557, -0.092, -0.941, -0.317, -0.719, -1.392)
                    .curve_to_relative(0.371, -1.801, 0.458, -3.806, 0.619, -4.527)
                    .curve_to_relative(0.139, -0.624, 0.352, -0.758, 0.936, -0.704)
                    .curve_to_relative(0.449, 0.042, 0.649, 0.088, 1.342, 0.152)
                    .curve_to_relative(0.599, 0.056, 0.798, 0.736, 0.631, 1.483)
                    .curve_to(16.082, 27.831, 15.736, 29.432, 15.544, 30.688)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::BackRightUpperArm.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(32.553, 30.647)
                    .curve_to_relative(0.132, 1.149, 0.476, 1.622, 0.846, 1.592)
                    .curve_to_relative(0.435, -0.035, 0.813, -0.118, 1.198, -0.167)
                    .curve_to_relative(0.56, -0.071, 0.952, -0.281, 0.771, -1.364)
                    .curve_to_relative(-0.303, -1.813, -0.315, -3.82, -0.448, -4.547)
                    .curve_to_relative(-0.115, -0.629, -0.323, -0.771, -0.909, -0.738)
                    .curve_to_relative(-0.451, 0.025, -0.652, 0.063, -1.347, 0.102)
                    .curve_to_relative(-0.601, 0.033, -0.825, 0.705, -0.687, 1.458)
                    .curve_to(32.122, 27.772, 32.408, 29.385, 32.553, 30.647)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::BackLeftButtock.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(16.87, 44.209)
                    .curve_to_relative(0.0, -0.697, 0.207, -2.048, 0.621, -2.664)
                    .curve_to_relative(0.621, -0.923, 1.31, -1.159, 3.603, -0.834)
                    .curve_to_relative(2.303, 0.327, 2.3, 2.656, 1.917, 4.963)
                    .curve_to_relative(-0.29, 1.744, -3.858, 1.96, -5.346, 0.74)
                    .curve_to(17.068, 45.925, 16.78, 45.051, 16.87, 44.209)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::BackRightButtock.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(31.13, 44.209)
                    .curve_to_relative(0.0, -0.697, -0.207, -2.048, -0.621, -2.664)
                    .curve_to_relative(-0.621, -0.923, -1.31, -1.159, -3.603, -0.834)
                    .curve_to_relative(-2.303, 0.327, -2.3, 2.656, -1.917, 4.963)
                    .curve_to_relative(0.29, 1.744, 3.858, 1.96, 5.346, 0.74)
                    .curve_to(30.932, 45.925, 31.22, 45.051, 31.13, 44.209)
                    .close()
            },
        )
        .build()
});

/// Icon for Child Front View.
pub static CHILD_FRONT: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("ChildFront", 48.0, 128.0, 48.0, 128.0)
        .description("Icon for Child Front View.")
        .path(
            PathStyle::new()
                .named("background")
                .fill(Color::from_argb(0xFFEFC3AD))
                .stroke(Color::BLACK, 0.5669)
                .stroke_miter(10.0),
            |p| {
                p.move_to(36.835, 45.666)
                    .curve_to_relative(-0.124, -1.269, -0.479, -2.526, -0.155, -3.815)
                    .curve_to_relative(0.029, -0.116, -0.005, -0.252, -0.029, -0.375)
                    .curve_to_relative(-0.164, -0.842, -0.192, -1.699, -0.233, -2.549)
                    .curve_to_relative(-0.06, -1.263, -0.032, -1.888, -0.017, -3.154)
                    .curve_to_relative(0.009, -0.737, -0.282, -2.557, -0.402, -3.284)
                    .curve_to_relative(-0.357, -2.162, -0.58, -4.198, -0.8, -5.722)
                    .curve_to_relative(-0.179, -2.55, -0.314, -3.809, -0.625, -4.826)
                    .curve_to_relative(-0.332, -1.085, -0.634, -1.867, -1.606, -2.391)
                    .curve_to_relative(-0.76, -0.41, -1.618, -0.751, -2.427, -1.015)
                    .curve_to_relative(-1.073, -0.35, -2.232, -0.853, -3.184, -1.459)
                    .curve_to_relative(-1.915, -1.219, -1.719, -2.374, -0.772, -3.32)
                    .curve_to_relative(1.538, -1.538, 2.113, -3.64, 2.113, -4.654)
                    .curve_to_relative(0.551, -0.108, 0.798, -2.799, 0.255, -2.683)
                    .curve_to_relative(-0.071, -0.898, -0.576, -3.586, -2.431, -4.761)
                    .curve_to_relative(-1.402, -0.888, -3.263, -0.892, -4.976, 0.016)
                    .curve_to(18.96, 3.044, 19.11, 5.62, 18.989, 6.419)
                    .curve_to_relative(-0.541, -0.047, -0.431, 2.375, 0.085, 2.684)
                    .curve_to_relative(0.234, 0.992, 0.792, 3.275, 2.179, 4.662)
                    .curve_to_relative(0.878, 0.878, 0.778, 2.1, -0.603, 3.017)
                    .curve_to_relative(-1.249, 0.83, -3.451, 1.661, -4.928, 2.228)
                    .curve_to_relative(-1.527, 0.586, -2.162, 2.021, -2.518, 2.916)
                    .curve_to_relative(-0.252, 0.634, -0.334, 1.291, -0.397, 1.985)
                    .curve_to_relative(-0.069, 0.757, -0.158, 1.575, -0.158, 2.331)
                    .curve_to_relative(0.0, 0.927, -0.074, 1.443, -0.093, 1.669)
                    .curve_to_relative(-0.156, 1.9, -0.307, 3.168, -0.67, 4.87)
                    .curve_to_relative(-0.104, 0.489, -0.267, 1.824, -0.286, 2.319)
                    .curve_to_relative(-0.074, 1.893, 0.022, 2.944, -0.143, 4.839)
                    .curve_to_relative(-0.097, 1.121, -0.022, 2.257, -0.028, 3.387)
                    .curve_to_relative(-0.002, 0.302, -0.053, 0.599, -0.09, 0.897)
                    .curve_to_relative(-0.1, 0.813, -0.321, 1.615, -0.058, 2.463)
                    .curve_to_relative(0.431, 1.391, 1.242, 2.406, 2.584, 2.985)
                    .curve_to_relative(0.246, 0.106, 0.507, 0.168, 0.673, -0.109)
                    .curve_to_relative(0.144, -0.241, -0.113, -0.353, -0.229, -0.499)
                    .curve_to_relative(-0.094, -0.118, -0.2, -0.236, -0.324, -0.32)
                    .curve_to_relative(-0.894, -0.607, -0.757, -1.524, -0.727, -2.404)
                    .curve_to_relative(0.007, -0.212, 0.148, -0.43, 0.354, -0.44)
                    .curve_to_relative(0.277, -0.013, 0.25, 0.255, 0.258, 0.451)
                    .curve_to_relative(0.007, 0.152, -0.023, 0.31, 0.01, 0.455)
                    .curve_to_relative(0.098, 0.433, 0.072, 0.915, 0.468, 1.237)
                    .curve_to_relative(0.12, 0.098, 0.235, 0.206, 0.401, 0.164)
                    .curve_to_relative(0.197, -0.05, 0.176, -0.222, 0.176, -0.37)
                    .curve_to_relative(-0.002, -0.887, -0.004, -1.773, -0.014, -2.66)
                    .curve_to_relative(-0.001, -0.122, -0.02, -0.254, -0.07, -0.364)
                    .curve_to_relative(-0.237, -0.521, -0.492, -1.034, -0.733, -1.554)
                    .curve_to_relative(-0.321, -0.694, -0.357, -1.433, -0.166, -2.148)
                    .curve_to_relative(0.598, -2.232, 1.259, -4.448, 1.666, -6.726)
                    .curve_to_relative(0.247, -1.383, 0.533, -2.767, 0.529, -4.181)
                    .curve_to_relative(-0.002, -0.634, 0.147, -1.115, 0.198, -1.848)
                    .curve_to_relative(0.006, -0.08, 0.013, -0.244, 0.095, -0.325)
                    .curve_to_relative(0.107, 0.04, 0.148, 0.226, 0.162, 0.337)
                    .curve_to_relative(0.076, 0.572, 0.339, 2.844, 0.37, 3.702)
                    .curve_to_relative(-0.011, 0.732, -0.034, 1.931, -0.093, 2.659)
                    .curve_to_relative(-0.157, 1.943, -0.405, 3.953, -0.526, 5.844)
                    .curve_to_relative(-0.116, 1.817, -0.224, 3.243, -0.224, 4.692)
                    .curve_to_relative(0.0, 2.79, -0.049, 8.132, 0.899, 12.62)
                    .curve_to_relative(0.219, 1.037, 0.351, 2.079, 0.301, 3.146)
                    .curve_to_relative(-0.04, 0.86, -0.005, 1.722, -0.008, 2.584)
                    .curve_to_relative(-0.001, 0.329, -0.001, 0.663, -0.035, 0.985)
                    .curve_to_relative(-0.174, 1.652, -0.329, 2.884, -0.329, 4.614)
                    .curve_to_relative(0.0, 0.903, -0.01, 1.826, 0.099, 2.709)
                    .curve_to_relative(0.295, 2.389, 0.641, 4.775, 1.138, 7.136)
                    .curve_to_relative(0.165, 0.783, 0.141, 1.591, -0.53, 2.258)
                    .curve_to_relative(-0.25, 0.248, -0.49, 0.582, -0.64, 0.925)
                    .curve_to_relative(-0.184, 0.42, -0.471, 0.727, -0.872, 0.906)
                    .curve_to_relative(-0.615, 0.274, -1.027, 0.81, -1.581, 1.159)
                    .curve_to_relative(-0.174, 0.109, -0.277, 0.268, -0.301, 0.497)
                    .curve_to_relative(-0.075, 0.72, 0.257, 1.256, 0.94, 1.453)
                    .curve_to_relative(0.168, 0.049, 0.351, 0.057, 0.511, 0.123)
                    .curve_to_relative(0.972, 0.402, 1.415, 0.324, 2.166, -0.401)
                    .curve_to_relative(0.236, -0.227, 0.442, -0.487, 0.76, -0.618)
                    .curve_to_relative(0.264, -0.109, 0.409, -0.3, 0.542, -0.578)
                    .curve_to_relative(0.251, -0.525, 0.654, -0.922, 1.282, -1.06)
                    .curve_to_relative(0.818, -0.18, 0.986, -0.408, 0.947, -1.276)
                    .curve_to_relative(-0.034, -0.753, -0.197, -1.503, -0.259, -2.265)
                    .curve_to_relative(-0.004, -0.048, -0.016, -0.1, -0.03, -0.147)
                    .curve_to_relative(-0.342, -1.234, -0.243, -2.357, -0.119, -3.51)
                    .curve_to_relative(0.195, -1.815, 0.557, -3.421, 0.754, -5.251)
                    .curve_to_relative(0.134, -1.242, 0.032, -2.625, 0.036, -3.85)
                    .curve_to_relative(0.005, -1.349, 0.053, -2.264, 0.355, -3.632)
                    .curve_to_relative(0.372, -1.685, 0.591, -3.004, 0.762, -4.734)
                    .curve_to_relative(0.164, -1.666, 0.182, -3.326, 0.342, -4.971)
                    .curve_to_relative(0.177, -1.822, 0.105, -1.067, 0.32, -2.886)
                    .curve_to_relative(0.022, -0.183, 0.086, -0.343, 0.162, -0.5)
                    .curve_to_relative(0.066, -0.137, 0.156, -0.279, 0.339, -0.242)
                    .curve_to_relative(0.132, 0.027, 0.21, 0.143, 0.238, 0.269)
                    .curve_to_relative(0.064, 0.294, 0.12, 0.591, 0.17, 0.888)
                    .curve_to_relative(0.235, 1.384, 0.058, 0.293, 0.255, 1.683)
                    .curve_to_relative(0.222, 1.566, 0.554, 3.122, 0.531, 4.717)
                    .curve_to_relative(-0.011, 0.76, 0.208, 1.616, 0.273, 2.372)
                    .curve_to_relative(0.101, 1.174, 0.245, 1.904, 0.449, 3.053)
                    .curve_to_relative(0.2, 1.125, 0.201, 2.038, 0.201, 3.453)
                    .curve_to_relative(0.0, 1.491, -0.213, 2.909, -0.084, 4.354)
                    .curve_to_relative(0.156, 1.747, 0.628, 3.453, 0.967, 5.175)
                    .curve_to_relative(0.199, 1.011, 0.213, 2.082, -0.015, 3.092)
                    .curve_to_relative(-0.241, 1.065, -0.285, 2.139, -0.365, 3.212)
                    .curve_to_relative(-0.049, 0.651, 0.18, 0.93, 0.828, 1.055)
                    .curve_to_relative(0.458, 0.088, 0.882, 0.267, 1.062, 0.648)
                    .curve_to_relative(0.392, 0.829, 1.219, 1.167, 1.813, 1.761)
                    .curve_to_relative(0.649, 0.648, 1.187, 0.65, 2.027, 0.161)
                    .curve_to_relative(0.16, -0.093, 0.301, 0.006, 0.417, -0.026)
                    .curve_to_relative(0.398, -0.109, 0.824, -0.228, 0.969, -0.696)
                    .curve_to_relative(0.157, -0.509, 0.021, -1.044, -0.326, -1.308)
                    .curve_to_relative(-0.42, -0.32, -0.819, -0.68, -1.276, -0.937)
                    .curve_to_relative(-0.69, -0.389, -1.158, -0.957, -1.527, -1.627)
                    .curve_to_relative(-0.1, -0.182, -0.219, -0.342, -0.368, -0.478)
                    .curve_to_relative(-0.344, -0.315, -0.444, -0.705, -0.451, -1.16)
                    .curve_to_relative(-0.019, -1.271, 0.356, -2.483, 0.515, -3.726)
                    .curve_to_relative(0.121, -0.946, 0.335, -1.875, 0.424, -2.827)
                    .curve_to_relative(0.101, -1.075, 0.273, -2.143, 0.356, -3.222)
                    .curve_to_relative(0.098, -1.285, 0.187, -2.562, -0.036, -3.842)
                    .curve_to_relative(-0.207, -1.191, -0.411, -2.379, -0.348, -3.603)
                    .curve_to_relative(0.085, -1.657, -0.158, -3.332, 0.299, -4.967)
                    .curve_to_relative(0.673, -3.915, 0.631, -7.269, 0.776, -11.712)
                    .curve_to_relative(0.077, -2.367, -0.186, -4.448, -0.309, -5.405)
                    .curve_to_relative(-0.381, -2.955, -0.526, -5.486, -0.526, -8.078)
                    .curve_to_relative(0.0, -1.206, 0.149, -4.936, 0.293, -4.936)
                    .curve_to_relative(0.129, 0.0, 0.604, 3.347, 0.81, 5.019)
                    .curve_to_relative(0.176, 1.423, 0.406, 2.831, 0.797, 4.21)
                    .curve_to_relative(0.349, 1.232, 0.732, 2.455, 1.096, 3.683)
                    .curve_to_relative(0.113, 0.383, 0.324, 0.772, 0.219, 1.169)
                    .curve_to_relative(-0.185, 0.698, -0.264, 1.438, -0.731, 2.044)
                    .curve_to_relative(-0.132, 0.172, -0.234, 0.409, -0.25, 0.623)
                    .curve_to_relative(-0.083, 1.105, -0.134, 2.212, -0.194, 3.319)
                    .curve_to_relative(-0.01, 0.187, 0.027, 0.377, 0.215, 0.447)
                    .curve_to_relative(0.214, 0.08, 0.302, -0.103, 0.403, -0.253)
                    .curve_to_relative(0.17, -0.254, 0.311, -0.499, 0.311, -0.83)
                    .curve_to_relative(0.0, -0.322, 0.086, -0.646, 0.146, -0.966)
                    .curve_to_relative(0.024, -0.127, 0.099, -0.242, 0.234, -0.27)
                    .curve_to_relative(0.16, -0.034, 0.199, 0.116, 0.269, 0.215)
                    .curve_to_relative(0.366, 0.521, 0.087, 1.073, 0.046, 1.602)
                    .curve_to_relative(-0.028, 0.368, -0.203, 0.723, -0.602, 0.903)
                    .curve_to_relative(-0.264, 0.119, -0.412, 0.366, -0.511, 0.635)
                    .curve_to_relative(-0.063, 0.171, -0.105, 0.362, 0.054, 0.49)
                    .curve_to_relative(0.136, 0.109, 0.282, -0.003, 0.423, -0.059)
                    .curve_to_relative(1.278, -0.5, 2.149, -1.375, 2.515, -2.717)
                    .curve_to(36.676, 46.603, 36.883, 46.154, 36.835, 45.666)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontRightLowerThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(17.357, 55.586)
                    .curve_to_relative(0.269, 1.641, 0.655, 3.29, 0.885, 3.633)
                    .curve_to_relative(0.121, 0.18, 0.779, 0.199, 1.084, 0.198)
                    .curve_to_relative(1.337, -0.004, 1.853, -0.281, 1.865, -1.103)
                    .curve_to_relative(0.011, -0.753, 0.093, -1.69, 0.181, -2.6)
                    .curve_to(20.021, 55.69, 18.682, 55.647, 17.357, 55.586)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontRightUpperThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(19.935, 51.691)
                    .curve_to_relative(-0.807, -0.058, -2.318, -0.168, -2.75, 0.303)
                    .curve_to_relative(-0.253, 0.275, -0.1, 1.929, 0.173, 3.591)
                    .curve_to_relative(1.325, 0.061, 2.663, 0.104, 4.015, 0.128)
                    .curve_to_relative(0.1, -1.033, 0.209, -2.031, 0.235, -2.687)
                    .curve_to(21.644, 52.079, 21.309, 51.791, 19.935, 51.691)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontLeftLowerThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(26.808, 58.314)
                    .curve_to_relative(0.012, 0.822, 0.528, 1.099, 1.865, 1.103)
                    .curve_to_relative(0.305, 0.001, 0.963, -0.018, 1.084, -0.198)
                    .curve_to_relative(0.23, -0.343, 0.616, -1.993, 0.885, -3.633)
                    .curve_to_relative(-1.325, 0.061, -2.663, 0.104, -4.015, 0.128)
                    .curve_to(26.716, 56.624, 26.797, 57.561, 26.808, 58.314)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontLeftUpperThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(28.065, 51.691)
                    .curve_to_relative(-1.374, 0.099, -1.709, 0.388, -1.673, 1.335)
                    .curve_to_relative(0.025, 0.656, 0.135, 1.655, 0.235, 2.687)
                    .curve_to_relative(1.352, -0.024, 2.691, -0.067, 4.015, -0.128)
                    .curve_to_relative(0.273, -1.662, 0.425, -3.315, 0.173, -3.591)
                    .curve_to(30.383, 51.524, 28.872, 51.633, 28.065, 51.691)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontRightLowerAbdomen.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(18.257, 43.738)
                    .curve_to_relative(1.851, 0.062, 3.771, 0.095, 5.743, 0.095)
                    .vertical_line_to_relative(-2.177)
                    .curve_to_relative(-0.879, 0.0, -1.59, -0.709, -1.598, -1.586)
                    .curve_to_relative(-1.3, -0.017, -2.582, -0.055, -3.842, -0.113)
                    .curve_to(18.486, 41.258, 18.385, 42.523, 18.257, 43.738)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontRightUpperAbdomen.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(24.0, 38.458)
                    .vertical_line_to(35.54)
                    .curve_to_relative(-1.815, 0.0, -3.585, 0.029, -5.299, 0.081)
                    .curve_to_relative(-0.011, 1.483, -0.06, 2.931, -0.14, 4.337)
                    .curve_to_relative(1.26, 0.058, 2.542, 0.096, 3.842, 0.113)
                    .curve_to_relative(0.0, -0.005, -0.001, -0.009, -0.001, -0.014)
                    .curve_to(22.401, 39.174, 23.117, 38.458, 24.0, 38.458)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideRightLowerAbdomen.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(16.345, 40.573)
                    .curve_to_relative(-0.073, 1.148, -0.143, 2.14, -0.185, 3.081)
                    .curve_to_relative(0.687, 0.032, 1.388, 0.06, 2.097, 0.084)
                    .curve_to_relative(0.128, -1.216, 0.229, -2.48, 0.303, -3.78)
                    .curve_to_relative(-0.727, -0.034, -1.443, -0.076, -2.154, -0.123)
                    .curve_to(16.387, 40.08, 16.36, 40.332, 16.345, 40.573)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideRightUpperAbdomen.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(16.785, 35.691)
                    .curve_to_relative(-0.128, 1.389, -0.273, 2.785, -0.378, 4.145)
                    .curve_to_relative(0.711, 0.047, 1.428, 0.089, 2.154, 0.123)
                    .curve_to_relative(0.08, -1.406, 0.129, -2.854, 0.14, -4.337)
                    .curve_to(18.054, 35.641, 17.414, 35.664, 16.785, 35.691)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontLeftLowerAbdomen.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(24.0, 41.657)
                    .vertical_line_to_relative(2.177)
                    .curve_to_relative(1.972, 0.0, 3.892, -0.033, 5.743, -0.095)
                    .curve_to_relative(-0.128, -1.216, -0.229, -2.48, -0.303, -3.78)
                    .curve_to_relative(-1.26, 0.058, -2.542, 0.096, -3.842, 0.113)
                    .curve_to(25.59, 40.948, 24.879, 41.657, 24.0, 41.657)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontLeftUpperAbdomen.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(24.0, 35.54)
                    .vertical_line_to_relative(2.918)
                    .curve_to_relative(0.883, 0.0, 1.599, 0.716, 1.599, 1.599)
                    .curve_to_relative(0.0, 0.005, -0.001, 0.009, -0.001, 0.014)
                    .curve_to_relative(1.3, -0.017, 2.582, -0.055, 3.842, -0.113)
                    .curve_to_relative(-0.08, -1.406, -0.129, -2.854, -0.14, -4.337)
                    .curve_to(27.586, 35.568, 25.814, 35.54, 24.0, 35.54)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideLeftLowerAbdomen.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(29.743, 43.738)
                    .curve_to_relative(0.699, -0.023, 1.388, -0.051, 2.065, -0.082)
                    .curve_to_relative(-0.07, -1.242, -0.198, -2.255, -0.274, -2.842)
                    .curve_to_relative(-0.042, -0.329, -0.079, -0.647, -0.115, -0.966)
                    .curve_to_relative(-0.654, 0.042, -1.313, 0.08, -1.979, 0.111)
                    .curve_to(29.514, 41.258, 29.615, 42.523, 29.743, 43.738)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideLeftUpperAbdomen.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(29.299, 35.621)
                    .curve_to_relative(0.011, 1.483, 0.06, 2.931, 0.14, 4.337)
                    .curve_to_relative(0.667, -0.031, 1.326, -0.069, 1.979, -0.111)
                    .curve_to_relative(-0.168, -1.46, -0.28, -2.83, -0.343, -4.162)
                    .curve_to(30.492, 35.66, 29.899, 35.639, 29.299, 35.621)
                    .close()
            },
        )
        .build()
});

/// Icon for Exercise treatment type.
pub static IC_ACTIVITY: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcActivity", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Exercise treatment type.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF67DFE8)), |p| {
            p.move_to(19.004, 12.345)
                .curve_to_relative(1.388, 0.0, 2.518, -1.129, 2.518, -2.518)
                .curve_to_relative(0.0, -1.389, -1.13, -2.518, -2.518, -2.518)
                .reflective_curve_to_relative(-2.518, 1.13, -2.518, 2.518)
                .curve_to(16.486, 11.216, 17.616, 12.345, 19.004, 12.345)
                .close()
                .move_to(19.004, 8.083)
                .curve_to_relative(0.962, 0.0, 1.745, 0.782, 1.745, 1.745)
                .curve_to_relative(0.0, 0.962, -0.783, 1.745, -1.745, 1.745)
                .curve_to_relative(-0.962, 0.0, -1.745, -0.782, -1.745, -1.745)
                .curve_to(17.258, 8.865, 18.042, 8.083, 19.004, 8.083)
                .close()
                .move_to(22.724, 15.283)
                .curve_to_relative(-0.036, -0.047, -0.869, -1.15, -2.101, -1.15)
                .curve_to_relative(-0.916, 0.0, -1.511, 0.569, -2.037, 1.073)
                .curve_to_relative(-0.465, 0.445, -0.868, 0.83, -1.43, 0.83)
                .horizontal_line_to_relative(-0.001)
                .curve_to_relative(-0.458, 0.0, -0.833, -0.268, -1.206, -0.595)
                .line_to_relative(1.943, -1.467)
                .line_to_relative(-5.312, -7.037)
                .line_to_relative(-5.126, 3.871)
                .curve_to_relative(-0.302, 0.268, -0.731, 0.963, -0.192, 1.678)
                .curve_to_relative(0.25, 0.33, 0.54, 0.429, 0.74, 0.454)
                .curve_to_relative(0.477, 0.059, 0.861, -0.241, 0.892, -0.266)
                .line_to_relative(3.219, -2.43)
                .line_to_relative(0.788, 1.044)
                .line_to_relative(-4.625, 3.49)
                .curve_to_relative(-0.433, -0.389, -0.923, -0.705, -1.523, -0.705)
                .horizontal_line_to(6.753)
                .curve_to_relative(-0.919, 0.0, -1.7, 0.709, -2.389, 1.334)
                .curve_to_relative(-0.411, 0.373, -0.877, 0.797, -1.135, 0.797)
                .curve_to_relative(-0.499, 0.0, -1.145, -0.716, -1.332, -0.967)
                .curve_to_relative(-0.127, -0.171, -0.369, -0.206, -0.541, -0.079)
                .curve_to_relative(-0.171, 0.127, -0.207, 0.369, -0.08, 0.54)
                .curve_to_relative(0.097, 0.131, 0.977, 1.279, 1.953, 1.279)
                .curve_to_relative(0.556, 0.0, 1.065, -0.462, 1.654, -0.997)
                .curve_to_relative(0.586, -0.531, 1.249, -1.134, 1.87, -1.134)
                .horizontal_line_to_relative(0.0)
                .curve_to_relative(0.547, 0.0, 1.025, 0.498, 1.532, 1.026)
                .curve_to_relative(0.563, 0.586, 1.145, 1.192, 1.935, 1.192)
                .curve_to_relative(0.754, 0.0, 1.392, -0.522, 2.009, -1.028)
                .curve_to_relative(0.576, -0.472, 1.172, -0.961, 1.799, -0.961)
                .curve_to_relative(0.374, 0.001, 0.726, 0.324, 1.131, 0.698)
                .curve_to_relative(0.528, 0.486, 1.126, 1.036, 1.995, 1.036)
                .horizontal_line_to_relative(0.001)
                .curve_to_relative(0.873, 0.0, 1.453, -0.555, 1.965, -1.044)
                .curve_to_relative(0.481, -0.461, 0.897, -0.859, 1.502, -0.859)
                .curve_to_relative(0.839, 0.0, 1.474, 0.831, 1.481, 0.84)
                .curve_to_relative(0.129, 0.171, 0.37, 0.203, 0.541, 0.077)
                .curve_to(22.815, 15.695, 22.851, 15.454, 22.724, 15.283)
                .close()
                .move_to(11.74, 15.437)
                .curve_to_relative(-0.535, 0.439, -1.04, 0.854, -1.518, 0.854)
                .curve_to_relative(-0.461, -0.001, -0.907, -0.465, -1.378, -0.955)
                .curve_to_relative(-0.003, -0.003, -0.006, -0.006, -0.008, -0.009)
                .line_to_relative(5.151, -3.888)
                .line_to(12.265, 9.16)
                .line_to_relative(-3.847, 2.904)
                .curve_to_relative(-0.025, 0.021, -0.188, 0.132, -0.322, 0.107)
                .curve_to_relative(-0.028, -0.004, -0.113, -0.013, -0.217, -0.151)
                .curve_to_relative(-0.227, -0.302, 0.012, -0.563, 0.064, -0.614)
                .line_to(12.43, 8.02)
                .line_to_relative(4.379, 5.802)
                .line_to_relative(-1.447, 1.092)
                .curve_to_relative(-0.387, -0.333, -0.805, -0.613, -1.333, -0.613)
                .curve_to(13.125, 14.301, 12.389, 14.904, 11.74, 15.437)
                .close()
        })
        .build()
});

/// Icon for Announcement treatment type.
pub static IC_ANNOUNCEMENT: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcAnnouncement", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Announcement treatment type.")
        .path(PathStyle::new().fill(Color::from_argb(0xFFCF8BFE)), |p| {
            p.move_to(11.139, 17.791)
                .curve_to_relative(0.359, 0.441, 0.721, 0.908, 0.656, 1.567)
                .curve_to_relative(-0.028, 0.287, 0.254, 0.422, 0.468, 0.566)
                .curve_to_relative(0.379, 0.255, 0.776, 0.486, 1.134, 0.768)
                .curve_to_relative(0.584, 0.459, 0.551, 0.893, -0.068, 1.282)
                .curve_to_relative(-0.024, 0.015, -0.053, 0.023, -0.077, 0.037)
                .curve_to_relative(-1.908, 1.116, -1.91, 1.119, -3.503, -0.445)
                .curve_to_relative(-0.308, -0.302, -0.648, -0.557, -0.996, -0.808)
                .curve_to_relative(-0.523, -0.378, -1.029, -0.565, -1.636, -0.145)
                .curve_to_relative(-0.397, 0.274, -0.893, 0.242, -1.336, 0.159)
                .curve_to_relative(-1.938, -0.361, -3.766, -2.196, -3.628, -4.353)
                .curve_to_relative(0.027, -0.421, 0.15, -0.782, 0.425, -1.092)
                .curve_to_relative(0.473, -0.534, 0.94, -1.075, 1.433, -1.591)
                .curve_to_relative(1.053, -1.102, 1.622, -2.391, 1.616, -3.93)
                .curve_to(5.622, 8.494, 5.615, 7.183, 6.298, 5.981)
                .curve_to_relative(0.668, -1.176, 1.45, -1.552, 2.78, -1.272)
                .curve_to_relative(1.491, 0.314, 2.75, 1.096, 3.937, 1.997)
                .curve_to_relative(1.723, 1.309, 3.164, 2.882, 4.262, 4.754)
                .curve_to_relative(0.566, 0.966, 1.028, 1.963, 1.05, 3.126)
                .curve_to_relative(0.016, 0.838, -0.361, 1.439, -1.01, 1.864)
                .curve_to_relative(-0.722, 0.473, -1.512, 0.762, -2.415, 0.753)
                .curve_to_relative(-1.109, -0.01, -2.218, 0.085, -3.312, 0.298)
                .curve_to(11.422, 17.534, 11.25, 17.566, 11.139, 17.791)
                .close()
                .move_to(15.964, 15.131)
                .curve_to_relative(0.814, 0.019, 1.146, -0.311, 1.054, -0.994)
                .curve_to_relative(-0.076, -0.565, -0.261, -1.102, -0.549, -1.609)
                .curve_to_relative(-1.297, -2.287, -3.143, -4.054, -5.262, -5.554)
                .curve_to_relative(-0.672, -0.476, -1.398, -0.873, -2.246, -1.009)
                .curve_to(8.118, 5.828, 7.792, 6.08, 7.812, 6.941)
                .curve_to_relative(0.015, 0.653, 0.28, 1.225, 0.603, 1.764)
                .curve_to_relative(1.327, 2.218, 3.098, 4.016, 5.248, 5.441)
                .curve_to(14.402, 14.636, 15.183, 15.05, 15.964, 15.131)
                .close()
                .move_to(14.074, 15.887)
                .curve_to_relative(-2.942, -1.676, -5.256, -3.962, -7.018, -6.86)
                .curve_to(6.968, 9.339, 6.98, 9.61, 6.966, 9.881)
                .curve_to_relative(-0.046, 0.886, -0.116, 1.806, -0.571, 2.56)
                .curve_to_relative(-0.493, 0.817, -0.344, 1.495, 0.07, 2.226)
                .curve_to_relative(0.588, 1.039, 1.428, 1.764, 2.583, 2.108)
                .curve_to_relative(0.309, 0.092, 0.636, 0.154, 0.919, -0.004)
                .curve_to(11.235, 16.063, 12.615, 15.945, 14.074, 15.887)
                .close()
                .move_to(19.315, 10.836)
                .curve_to_relative(-0.356, 0.0, -0.527, 0.007, -0.697, -0.002)
                .curve_to_relative(-0.224, -0.012, -0.376, -0.132, -0.426, -0.351)
                .curve_to_relative(-0.053, -0.231, 0.073, -0.402, 0.266, -0.48)
                .curve_to_relative(0.421, -0.169, 0.852, -0.314, 1.285, -0.453)
                .curve_to_relative(0.351, -0.113, 0.709, -0.202, 1.064, -0.304)
                .curve_to_relative(0.687, -0.197, 0.768, -0.122, 0.985, 0.505)
                .curve_to_relative(0.228, 0.659, -0.219, 0.742, -0.64, 0.82)
                .curve_to(20.485, 10.695, 19.807, 10.768, 19.315, 10.836)
                .close()
                .move_to(11.967, 3.94)
                .curve_to_relative(0.111, -0.717, 0.227, -1.505, 0.358, -2.29)
                .curve_to_relative(0.09, -0.541, 0.518, -0.471, 0.873, -0.405)
                .curve_to_relative(0.404, 0.074, 0.677, 0.279, 0.495, 0.783)
                .curve_to_relative(-0.26, 0.724, -0.48, 1.462, -0.723, 2.192)
                .curve_to_relative(-0.103, 0.309, -0.251, 0.626, -0.644, 0.551)
                .curve_to(11.911, 4.692, 11.956, 4.327, 11.967, 3.94)
                .close()
                .move_to(16.128, 7.225)
                .curve_to_relative(-0.44, -0.003, -0.67, -0.372, -0.418, -0.696)
                .curve_to_relative(0.556, -0.716, 1.142, -1.412, 1.755, -2.08)
                .curve_to_relative(0.296, -0.322, 0.647, -0.132, 0.903, 0.113)
                .curve_to_relative(0.23, 0.22, 0.43, 0.521, 0.125, 0.814)
                .curve_to_relative(-0.675, 0.648, -1.386, 1.258, -2.158, 1.79)
                .curve_to(16.269, 7.212, 16.174, 7.213, 16.128, 7.225)
                .close()
                .move_to(13.662, 11.656)
                .curve_to_relative(0.0, 0.2, 0.03, 0.406, -0.006, 0.599)
                .curve_to_relative(-0.087, 0.47, -0.46, 0.662, -0.805, 0.357)
                .curve_to_relative(-0.922, -0.813, -1.819, -1.658, -2.594, -2.618)
                .curve_to(10.0, 9.675, 10.075, 9.445, 10.491, 9.296)
                .curve_to(12.09, 8.724, 13.686, 9.897, 13.662, 11.656)
                .close()
        })
        .build()
});

/// Icon for Double Down Arrow.
pub static IC_ARROW_DOUBLE_DOWN: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcArrowDoubleDown", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Double Down Arrow.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(1.895, 16.653)
                .curve_to_relative(2.121, 1.967, 4.65, 4.43, 5.771, 6.145)
                .vertical_line_to(22.8)
                .curve_to_relative(0.0, 0.0, 0.001, -0.001, 0.001, -0.001)
                .line_to(7.668, 22.8)
                .vertical_line_to_relative(-0.002)
                .curve_to_relative(1.121, -1.715, 3.65, -4.178, 5.771, -6.145)
                .line_to_relative(-1.44, -1.979)
                .curve_to_relative(0.0, 0.0, -1.715, 1.53, -3.188, 2.964)
                .vertical_line_to(1.2)
                .horizontal_line_to(6.524)
                .vertical_line_to_relative(16.438)
                .curve_to_relative(-1.474, -1.434, -3.189, -2.964, -3.189, -2.964)
                .line_to(1.895, 16.653)
                .close()
                .move_to(10.561, 16.653)
                .curve_to_relative(2.121, 1.967, 4.65, 4.43, 5.771, 6.145)
                .vertical_line_to(22.8)
                .line_to_relative(0.001, -0.001)
                .curve_to_relative(0.0, 0.0, 0.001, 0.001, 0.001, 0.001)
                .line_to_relative(0.0, -0.002)
                .curve_to_relative(1.121, -1.715, 3.65, -4.178, 5.771, -6.145)
                .line_to_relative(-1.44, -1.979)
                .curve_to_relative(0.0, 0.0, -1.715, 1.53, -3.188, 2.964)
                .vertical_line_to(1.2)
                .horizontal_line_to(15.19)
                .vertical_line_to_relative(16.438)
                .curve_to_relative(-1.474, -1.434, -3.189, -2.964, -3.189, -2.964)
                .line_to(10.561, 16.653)
                .close()
        })
        .build()
});

/// Icon for Double Up Arrow.
pub static IC_ARROW_DOUBLE_UP: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcArrowDoubleUp", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Double Up Arrow.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(1.895, 7.347)
                .curve_to_relative(2.121, -1.967, 4.65, -4.43, 5.771, -6.145)
                .vertical_line_to(1.2)
                .curve_to_relative(0.0, 0.0, 0.001, 0.001, 0.001, 0.001)
                .line_to(7.668, 1.2)
                .vertical_line_to_relative(0.002)
                .curve_to_relative(1.121, 1.715, 3.65, 4.178, 5.771, 6.145)
                .line_to_relative(-1.44, 1.979)
                .curve_to_relative(0.0, 0.0, -1.715, -1.53, -3.188, -2.964)
                .vertical_line_to(22.8)
                .horizontal_line_to(6.524)
                .vertical_line_to(6.362)
                .curve_to(5.05, 7.796, 3.335, 9.327, 3.335, 9.327)
                .line_to(1.895, 7.347)
                .close()
                .move_to(10.561, 7.347)
                .curve_to_relative(2.121, -1.967, 4.65, -4.43, 5.771, -6.145)
                .vertical_line_to(1.2)
                .line_to_relative(0.001, 0.001)
                .curve_to_relative(0.0, 0.0, 0.001, -0.001, 0.001, -0.001)
                .line_to_relative(0.0, 0.002)
                .curve_to_relative(1.121, 1.715, 3.65, 4.178, 5.771, 6.145)
                .line_to_relative(-1.44, 1.979)
                .curve_to_relative(0.0, 0.0, -1.715, -1.53, -3.188, -2.964)
                .vertical_line_to(22.8)
                .horizontal_line_to(15.19)
                .vertical_line_to(6.362)
                .curve_to_relative(-1.474, 1.434, -3.189, 2.964, -3.189, 2.964)
                .line_to(10.561, 7.347)
                .close()
        })
        .build()
});

/// Icon for Forty-Five Degrees Down Arrow.
pub static IC_ARROW_FORTYFIVE_DOWN: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcArrowFortyfiveDown", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Forty-Five Degrees Down Arrow.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF36FF00)), |p| {
            p.move_to(11.209, 19.372)
                .curve_to_relative(2.891, -0.109, 6.42, -0.156, 8.426, 0.264)
                .line_to_relative(0.002, 0.002)
                .line_to_relative(0.0, -0.001)
                .line_to_relative(0.001, 0.0)
                .line_to_relative(-0.001, -0.002)
                .curve_to_relative(-0.42, -2.006, -0.373, -5.535, -0.264, -8.426)
                .line_to_relative(-2.418, -0.381)
                .curve_to_relative(0.0, 0.0, -0.13, 2.295, -0.158, 4.351)
                .line_to(5.172, 3.555)
                .line_to(3.555, 5.172)
                .line_to_relative(11.623, 11.623)
                .curve_to_relative(-2.056, 0.028, -4.351, 0.158, -4.351, 0.158)
                .line_to(11.209, 19.372)
                .close()
        })
        .build()
});

/// Icon for Invalid BG Value.
pub static IC_ARROW_INVALID: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcArrowInvalid", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Invalid BG Value.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(17.633, 19.781)
                .curve_to_relative(0.667, 0.0, 1.208, -0.541, 1.208, -1.208)
                .curve_to_relative(0.0, -0.667, -0.541, -1.208, -1.208, -1.208)
                .curve_to_relative(-0.667, 0.0, -1.208, 0.541, -1.208, 1.208)
                .curve_to(16.425, 19.24, 16.966, 19.781, 17.633, 19.781)
                .close()
                .move_to(17.582, 16.878)
                .curve_to_relative(-0.483, 0.0, -0.874, -0.392, -0.874, -0.875)
                .curve_to_relative(0.0, -3.143, 1.465, -4.24, 2.643, -5.122)
                .curve_to_relative(0.987, -0.739, 1.7, -1.273, 1.7, -3.001)
                .curve_to_relative(0.0, -2.382, -2.288, -3.123, -3.122, -3.123)
                .curve_to_relative(-1.796, 0.0, -3.246, 1.076, -3.979, 2.952)
                .curve_to_relative(-0.176, 0.45, -0.685, 0.673, -1.133, 0.496)
                .curve_to_relative(-0.45, -0.176, -0.672, -0.683, -0.496, -1.133)
                .curve_to_relative(0.994, -2.545, 3.09, -4.064, 5.608, -4.064)
                .curve_to_relative(1.964, 0.0, 4.871, 1.548, 4.871, 4.871)
                .curve_to_relative(0.0, 2.603, -1.331, 3.599, -2.401, 4.4)
                .curve_to_relative(-1.086, 0.813, -1.942, 1.454, -1.942, 3.722)
                .curve_to(18.457, 16.487, 18.065, 16.878, 17.582, 16.878)
                .close()
                .move_to(6.572, 19.781)
                .curve_to_relative(0.667, 0.0, 1.208, -0.541, 1.208, -1.208)
                .curve_to_relative(0.0, -0.667, -0.541, -1.208, -1.208, -1.208)
                .curve_to_relative(-0.667, 0.0, -1.208, 0.541, -1.208, 1.208)
                .curve_to(5.364, 19.24, 5.905, 19.781, 6.572, 19.781)
                .close()
                .move_to(6.521, 16.878)
                .curve_to_relative(-0.483, 0.0, -0.874, -0.392, -0.874, -0.875)
                .curve_to_relative(0.0, -3.143, 1.465, -4.24, 2.643, -5.122)
                .curve_to_relative(0.987, -0.739, 1.7, -1.273, 1.7, -3.001)
                .curve_to_relative(0.0, -2.382, -2.288, -3.123, -3.122, -3.123)
                .curve_to_relative(-1.796, 0.0, -3.246, 1.076, -3.979, 2.952)
                .curve_to_relative(-0.176, 0.45, -0.685, 0.673, -1.133, 0.496)
                .curve_to(1.306, 8.031, 1.085, 7.525, 1.26, 7.075)
                .curve_to(2.254, 4.53, 4.35, 3.01, 6.868, 3.01)
                .curve_to_relative(1.964, 0.0, 4.871, 1.548, 4.871, 4.871)
                .curve_to_relative(0.0, 2.603, -1.331, 3.599, -2.401, 4.4)
                .curve_to_relative(-1.086, 0.813, -1.942, 1.454, -1.942, 3.722)
                .curve_to(7.395, 16.487, 7.004, 16.878, 6.521, 16.878)
                .close()
        })
        .build()
});

/// Icon for Left Down Arrow.
pub static IC_ARROW_LEFT_DOWN: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcArrowLeftDown", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Left Down Arrow.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(3.821, 12.017)
                .curve_to_relative(0.109, 2.891, 0.156, 6.42, -0.264, 8.426)
                .line_to_relative(-0.002, 0.002)
                .line_to_relative(0.001, 0.0)
                .line_to_relative(0.0, 0.001)
                .line_to_relative(0.002, -0.001)
                .curve_to_relative(2.006, -0.42, 5.535, -0.373, 8.426, -0.264)
                .line_to_relative(0.381, -2.418)
                .curve_to_relative(0.0, 0.0, -2.295, -0.13, -4.351, -0.158)
                .line_to(19.637, 5.98)
                .line_to_relative(-1.617, -1.617)
                .line_to(6.397, 15.986)
                .curve_to_relative(-0.028, -2.056, -0.158, -4.351, -0.158, -4.351)
                .line_to(3.821, 12.017)
                .close()
        })
        .build()
});

/// Icon for Left Up Arrow.
pub static IC_ARROW_LEFT_UP: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcArrowLeftUp", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Left Up Arrow.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(3.821, 12.791)
                .curve_to_relative(0.109, -2.891, 0.156, -6.42, -0.264, -8.426)
                .line_to(3.555, 4.364)
                .line_to_relative(0.001, 0.0)
                .line_to_relative(0.0, -0.001)
                .line_to_relative(0.002, 0.001)
                .curve_to_relative(2.006, 0.42, 5.535, 0.373, 8.426, 0.264)
                .line_to_relative(0.381, 2.418)
                .curve_to_relative(0.0, 0.0, -2.295, 0.13, -4.351, 0.158)
                .line_to_relative(11.623, 11.623)
                .line_to_relative(-1.617, 1.617)
                .line_to(6.397, 8.822)
                .curve_to_relative(-0.028, 2.056, -0.158, 4.351, -0.158, 4.351)
                .line_to(3.821, 12.791)
                .close()
        })
        .build()
});

/// Icon for Simple Down Arrow.
pub static IC_ARROW_SIMPLE_DOWN: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcArrowSimpleDown", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Simple Down Arrow.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF36FF00)), |p| {
            p.move_to(6.228, 16.653)
                .curve_to_relative(2.121, 1.967, 4.65, 4.43, 5.771, 6.145)
                .vertical_line_to(22.8)
                .line_to(12.0, 22.799)
                .line_to_relative(0.001, 0.001)
                .vertical_line_to_relative(-0.002)
                .curve_to_relative(1.121, -1.715, 3.65, -4.178, 5.771, -6.145)
                .line_to_relative(-1.44, -1.979)
                .curve_to_relative(0.0, 0.0, -1.715, 1.53, -3.188, 2.964)
                .vertical_line_to(1.2)
                .horizontal_line_to_relative(-2.286)
                .vertical_line_to_relative(16.438)
                .curve_to_relative(-1.474, -1.434, -3.189, -2.964, -3.189, -2.964)
                .line_to(6.228, 16.653)
                .close()
        })
        .build()
});

/// Icon for Simple Up Arrow.
pub static IC_ARROW_SIMPLE_UP: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcArrowSimpleUp", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Simple Up Arrow.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF36FF00)), |p| {
            p.move_to(17.772, 7.347)
                .curve_to_relative(-2.121, -1.967, -4.65, -4.43, -5.771, -6.145)
                .vertical_line_to(1.2)
                .line_to(12.0, 1.201)
                .line_to(11.999, 1.2)
                .line_to_relative(0.0, 0.002)
                .curve_to_relative(-1.121, 1.715, -3.65, 4.178, -5.771, 6.145)
                .line_to_relative(1.44, 1.979)
                .curve_to_relative(0.0, 0.0, 1.715, -1.53, 3.188, -2.964)
                .vertical_line_to(22.8)
                .horizontal_line_to_relative(2.286)
                .vertical_line_to(6.362)
                .curve_to_relative(1.474, 1.434, 3.189, 2.964, 3.189, 2.964)
                .line_to(17.772, 7.347)
                .close()
        })
        .build()
});

/// Icon for AutoSens.
pub static IC_AS: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcAs", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for AutoSens.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(16.086, 17.767)
                .vertical_line_to_relative(-8.069)
                .horizontal_line_to_relative(-2.302)
                .vertical_line_to_relative(8.069)
                .horizontal_line_to_relative(-3.454)
                .line_to_relative(4.604, 4.593)
                .line_to_relative(4.604, -4.593)
                .horizontal_line_to_relative(-3.452)
                .close()
                .move_to(9.066, 1.64)
                .line_to(4.461, 6.233)
                .horizontal_line_to_relative(3.453)
                .vertical_line_to_relative(8.069)
                .horizontal_line_to_relative(2.302)
                .vertical_line_to(6.233)
                .horizontal_line_to_relative(3.453)
                .line_to(9.066, 1.64)
                .close()
        })
        .build()
});

/// Icon for AutoSens Above.
pub static IC_AS_ABOVE: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcAsAbove", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for AutoSens Above.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(12.0, 5.669)
                .line_to_relative(-4.604, 4.593)
                .horizontal_line_to_relative(3.453)
                .vertical_line_to_relative(8.069)
                .horizontal_line_to_relative(2.302)
                .vertical_line_to_relative(-8.069)
                .horizontal_line_to_relative(3.453)
                .line_to(12.0, 5.669)
                .close()
        })
        .build()
});

/// Icon for AutoSens Above Disabled.
pub static IC_AS_ABOVE_X: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcAsAboveX", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for AutoSens Above Disabled.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(17.22, 5.669)
                .line_to_relative(-4.604, 4.593)
                .horizontal_line_to_relative(3.453)
                .vertical_line_to_relative(8.069)
                .horizontal_line_to_relative(2.302)
                .vertical_line_to_relative(-8.069)
                .horizontal_line_to_relative(3.453)
                .line_to(17.22, 5.669)
                .close()
                .move_to(10.073, 14.547)
                .line_to_relative(-2.532, -2.532)
                .line_to_relative(2.532, -2.532)
                .curve_to_relative(0.354, -0.354, 0.354, -0.93, 0.001, -1.283)
                .curve_to_relative(-0.172, -0.172, -0.4, -0.267, -0.642, -0.267)
                .curve_to_relative(-0.242, 0.0, -0.47, 0.095, -0.642, 0.266)
                .line_to_relative(-2.532, 2.532)
                .line_to(3.725, 8.199)
                .curve_to_relative(-0.172, -0.171, -0.4, -0.266, -0.642, -0.266)
                .curve_to_relative(-0.243, 0.0, -0.471, 0.095, -0.641, 0.267)
                .curve_to(2.088, 8.554, 2.088, 9.13, 2.443, 9.484)
                .line_to_relative(2.532, 2.532)
                .line_to_relative(-2.532, 2.532)
                .curve_to_relative(-0.172, 0.171, -0.266, 0.399, -0.266, 0.641)
                .curve_to_relative(-0.001, 0.243, 0.094, 0.471, 0.266, 0.643)
                .curve_to_relative(0.172, 0.171, 0.399, 0.265, 0.641, 0.265)
                .curve_to_relative(0.242, 0.0, 0.47, -0.094, 0.642, -0.266)
                .line_to_relative(2.532, -2.531)
                .line_to_relative(2.533, 2.532)
                .curve_to_relative(0.172, 0.171, 0.399, 0.265, 0.641, 0.265)
                .curve_to_relative(0.243, 0.0, 0.471, -0.094, 0.642, -0.266)
                .curve_to_relative(0.172, -0.171, 0.266, -0.399, 0.266, -0.642)
                .curve_to(10.34, 14.946, 10.245, 14.718, 10.073, 14.547)
                .close()
        })
        .build()
});

/// Icon for AutoSens Below.
pub static IC_AS_BELOW: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcAsBelow", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for AutoSens Below.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(13.151, 13.738)
                .vertical_line_to(5.669)
                .horizontal_line_to_relative(-2.302)
                .vertical_line_to_relative(8.069)
                .horizontal_line_to(7.396)
                .line_to(12.0, 18.331)
                .line_to_relative(4.604, -4.593)
                .horizontal_line_to(13.151)
                .close()
        })
        .build()
});

/// Icon for AutoSens Below Disabled.
pub static IC_AS_BELOW_X: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcAsBelowX", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for AutoSens Below Disabled.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(21.824, 13.738)
                .horizontal_line_to_relative(-3.453)
                .vertical_line_to(5.669)
                .horizontal_line_to_relative(-2.302)
                .vertical_line_to_relative(8.069)
                .horizontal_line_to_relative(-3.453)
                .line_to_relative(4.604, 4.593)
                .line_to(21.824, 13.738)
                .close()
                .move_to(10.073, 9.453)
                .line_to_relative(-2.532, 2.532)
                .line_to_relative(2.532, 2.532)
                .curve_to_relative(0.354, 0.354, 0.354, 0.93, 0.001, 1.283)
                .curve_to_relative(-0.172, 0.172, -0.4, 0.267, -0.642, 0.267)
                .curve_to_relative(-0.242, 0.0, -0.47, -0.095, -0.642, -0.266)
                .line_to_relative(-2.532, -2.532)
                .line_to_relative(-2.533, 2.533)
                .curve_to_relative(-0.172, 0.171, -0.4, 0.266, -0.642, 0.266)
                .curve_to_relative(-0.243, 0.0, -0.471, -0.095, -0.641, -0.267)
                .curve_to_relative(-0.354, -0.353, -0.354, -0.929, 0.001, -1.283)
                .line_to_relative(2.532, -2.532)
                .line_to(2.443, 9.453)
                .curve_to(2.271, 9.282, 2.176, 9.054, 2.176, 8.812)
                .curve_to_relative(0.0, -0.244, 0.094, -0.472, 0.267, -0.643)
                .curve_to_relative(0.172, -0.171, 0.399, -0.265, 0.641, -0.265)
                .curve_to_relative(0.242, 0.0, 0.47, 0.094, 0.642, 0.266)
                .line_to_relative(2.532, 2.531)
                .line_to_relative(2.533, -2.532)
                .curve_to(8.962, 7.998, 9.19, 7.904, 9.432, 7.904)
                .curve_to_relative(0.243, 0.0, 0.471, 0.094, 0.642, 0.266)
                .curve_to_relative(0.172, 0.171, 0.266, 0.399, 0.266, 0.642)
                .curve_to(10.34, 9.054, 10.245, 9.282, 10.073, 9.453)
                .close()
        })
        .build()
});

/// Icon for AutoSens Disabled.
pub static IC_AS_X: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcAsX", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for AutoSens Disabled.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(19.347, 17.767)
                .vertical_line_to(9.698)
                .horizontal_line_to_relative(-2.302)
                .vertical_line_to_relative(8.069)
                .horizontal_line_to_relative(-3.453)
                .line_to_relative(4.604, 4.593)
                .line_to_relative(4.604, -4.593)
                .horizontal_line_to_relative(-3.453)
                .close()
                .move_to(12.327, 1.64)
                .line_to(7.722, 6.233)
                .horizontal_line_to_relative(3.453)
                .vertical_line_to_relative(8.069)
                .horizontal_line_to_relative(2.302)
                .vertical_line_to(6.233)
                .horizontal_line_to_relative(3.453)
                .line_to(12.327, 1.64)
                .close()
                .move_to(9.097, 14.547)
                .line_to_relative(-2.532, -2.532)
                .line_to_relative(2.532, -2.532)
                .curve_to(9.452, 9.13, 9.452, 8.554, 9.098, 8.2)
                .curve_to_relative(-0.172, -0.172, -0.4, -0.267, -0.642, -0.267)
                .curve_to_relative(-0.242, 0.0, -0.47, 0.095, -0.642, 0.266)
                .line_to_relative(-2.532, 2.532)
                .line_to(2.749, 8.199)
                .curve_to_relative(-0.172, -0.171, -0.4, -0.266, -0.642, -0.266)
                .curve_to_relative(-0.243, 0.0, -0.471, 0.095, -0.641, 0.267)
                .curve_to(1.112, 8.554, 1.112, 9.13, 1.466, 9.484)
                .line_to_relative(2.532, 2.532)
                .line_to_relative(-2.532, 2.532)
                .curve_to(1.295, 14.718, 1.2, 14.946, 1.2, 15.188)
                .curve_to_relative(-0.001, 0.243, 0.094, 0.471, 0.266, 0.643)
                .curve_to_relative(0.172, 0.171, 0.399, 0.265, 0.641, 0.265)
                .curve_to_relative(0.242, 0.0, 0.47, -0.094, 0.642, -0.266)
                .line_to_relative(2.532, -2.531)
                .line_to_relative(2.533, 2.532)
                .curve_to_relative(0.172, 0.171, 0.399, 0.265, 0.641, 0.265)
                .curve_to_relative(0.243, 0.0, 0.471, -0.094, 0.642, -0.266)
                .curve_to_relative(0.172, -0.171, 0.266, -0.399, 0.266, -0.642)
                .curve_to(9.364, 14.946, 9.269, 14.718, 9.097, 14.547)
                .close()
        })
        .build()
});

/// Icon for Bolus treatment type.
pub static IC_BOLUS: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcBolus", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Bolus treatment type.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF67DFE8)), |p| {
            p.move_to(18.733, 12.133)
                .line_to_relative(-0.443, 0.584)
                .line_to(8.043, 4.948)
                .curve_to_relative(-0.095, -0.072, -0.22, -0.093, -0.334, -0.057)
                .line_to(4.87, 5.803)
                .line_to(1.2, 3.329)
                .line_to(4.497, 6.29)
                .line_to(4.385, 9.275)
                .curve_to_relative(-0.004, 0.12, 0.049, 0.234, 0.145, 0.307)
                .line_to_relative(10.247, 7.769)
                .line_to_relative(-0.443, 0.584)
                .curve_to_relative(-0.269, 0.355, -0.2, 0.861, 0.156, 1.131)
                .curve_to_relative(0.355, 0.269, 0.861, 0.2, 1.131, -0.156)
                .line_to_relative(1.712, -2.258)
                .line_to_relative(2.298, 1.743)
                .line_to_relative(-0.744, 0.982)
                .curve_to_relative(-0.269, 0.355, -0.2, 0.861, 0.156, 1.131)
                .curve_to_relative(0.355, 0.269, 0.861, 0.2, 1.131, -0.156)
                .line_to_relative(2.464, -3.249)
                .curve_to_relative(0.269, -0.355, 0.2, -0.861, -0.156, -1.131)
                .curve_to_relative(-0.355, -0.269, -0.861, -0.2, -1.131, 0.156)
                .line_to_relative(-0.744, 0.982)
                .line_to_relative(-2.298, -1.743)
                .line_to_relative(1.712, -2.258)
                .curve_to_relative(0.269, -0.355, 0.2, -0.861, -0.156, -1.131)
                .curve_to(19.508, 11.708, 19.002, 11.777, 18.733, 12.133)
                .close()
                .move_to(5.225, 6.46)
                .line_to_relative(2.527, -0.811)
                .line_to_relative(10.095, 7.653)
                .line_to_relative(-0.4, 0.527)
                .line_to_relative(-5.959, -4.518)
                .curve_to_relative(-0.094, -0.071, -0.228, -0.055, -0.304, 0.036)
                .line_to_relative(-2.201, 2.689)
                .line_to(8.29, 11.511)
                .line_to_relative(1.58, -1.899)
                .curve_to(9.872, 9.61, 9.875, 9.607, 9.876, 9.605)
                .curve_to_relative(0.071, -0.093, 0.056, -0.226, -0.035, -0.302)
                .curve_to(9.749, 9.225, 9.61, 9.237, 9.532, 9.331)
                .line_to_relative(-1.593, 1.914)
                .line_to_relative(-0.797, -0.604)
                .line_to_relative(1.58, -1.899)
                .curve_to(8.724, 8.74, 8.727, 8.737, 8.728, 8.734)
                .curve_to_relative(0.071, -0.093, 0.056, -0.226, -0.035, -0.302)
                .curve_to(8.601, 8.355, 8.462, 8.367, 8.384, 8.46)
                .line_to_relative(-1.593, 1.914)
                .line_to(5.994, 9.771)
                .line_to_relative(1.58, -1.899)
                .curve_to(7.576, 7.87, 7.579, 7.866, 7.58, 7.864)
                .curve_to_relative(0.071, -0.094, 0.057, -0.227, -0.034, -0.302)
                .curve_to(7.453, 7.484, 7.314, 7.497, 7.236, 7.59)
                .line_to(5.643, 9.504)
                .line_to(5.126, 9.112)
                .line_to(5.225, 6.46)
                .close()
        })
        .build()
});

/// Icon for BYODA.
pub static IC_BYODA: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcByoda", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for BYODA.")
        .path(PathStyle::new().fill(Color::WHITE), |p| {
            p.move_to(12.0, 1.201)
                .curve_to(6.036, 1.201, 1.201, 6.036, 1.201, 12.0)
                .reflective_curve_to(6.036, 22.799, 12.0, 22.799)
                .reflective_curve_to(22.799, 17.964, 22.799, 12.0)
                .vertical_line_to(1.201)
                .horizontal_line_to(12.0)
                .close()
                .move_to(12.0, 20.208)
                .curve_to_relative(-4.533, 0.0, -8.208, -3.675, -8.208, -8.208)
                .curve_to_relative(0.0, -4.533, 3.675, -8.208, 8.208, -8.208)
                .curve_to_relative(4.533, 0.0, 8.208, 3.675, 8.208, 8.208)
                .curve_to(20.208, 16.533, 16.533, 20.208, 12.0, 20.208)
                .close()
        })
        .build()
});

/// Icon for Calculator.
pub static IC_CALCULATOR: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcCalculator", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Calculator.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF67E86A)), |p| {
            p.move_to(17.877, 15.934)
                .horizontal_line_to_relative(-4.495)
                .curve_to_relative(-0.069, 0.0, -0.125, 0.056, -0.125, 0.125)
                .vertical_line_to_relative(1.422)
                .curve_to_relative(0.0, 0.069, 0.056, 0.125, 0.125, 0.125)
                .horizontal_line_to_relative(4.495)
                .curve_to_relative(0.069, 0.0, 0.125, -0.056, 0.125, -0.125)
                .vertical_line_to_relative(-1.422)
                .curve_to(18.001, 15.99, 17.946, 15.934, 17.877, 15.934)
                .close()
                .move_to(16.465, 14.494)
                .curve_to_relative(0.0, -0.069, -0.056, -0.125, -0.125, -0.125)
                .horizontal_line_to_relative(-1.422)
                .curve_to_relative(-0.069, 0.0, -0.125, 0.056, -0.125, 0.125)
                .vertical_line_to_relative(1.119)
                .horizontal_line_to_relative(1.672)
                .vertical_line_to(14.494)
                .close()
                .move_to(14.794, 18.988)
                .curve_to_relative(0.0, 0.069, 0.056, 0.125, 0.125, 0.125)
                .horizontal_line_to_relative(1.422)
                .curve_to_relative(0.069, 0.0, 0.125, -0.056, 0.125, -0.125)
                .vertical_line_to_relative(-1.119)
                .horizontal_line_to_relative(-1.672)
                .vertical_line_to(18.988)
                .close()
                .move_to(20.311, 1.2)
                .horizontal_line_to(3.689)
                .curve_to_relative(-0.379, 0.0, -0.686, 0.307, -0.686, 0.686)
                .vertical_line_to_relative(20.227)
                .curve_to_relative(0.0, 0.379, 0.307, 0.687, 0.686, 0.687)
                .horizontal_line_to_relative(16.622)
                .curve_to_relative(0.379, 0.0, 0.687, -0.307, 0.687, -0.687)
                .vertical_line_to(1.886)
                .curve_to(20.997, 1.507, 20.69, 1.2, 20.311, 1.2)
                .close()
                .move_to(19.624, 21.426)
                .horizontal_line_to(4.375)
                .vertical_line_to(6.792)
                .horizontal_line_to_relative(15.248)
                .vertical_line_to(21.426)
                .close()
                .move_to(19.624, 5.419)
                .horizontal_line_to(4.375)
                .vertical_line_to(2.573)
                .horizontal_line_to_relative(15.248)
                .vertical_line_to(5.419)
                .close()
                .move_to(13.382, 11.551)
                .horizontal_line_to_relative(4.495)
                .curve_to_relative(0.069, 0.0, 0.125, -0.056, 0.125, -0.125)
                .vertical_line_to_relative(-1.422)
                .curve_to_relative(0.0, -0.069, -0.056, -0.125, -0.125, -0.125)
                .horizontal_line_to_relative(-4.495)
                .curve_to_relative(-0.069, 0.0, -0.125, 0.056, -0.125, 0.125)
                .vertical_line_to_relative(1.422)
                .curve_to(13.257, 11.495, 13.313, 11.551, 13.382, 11.551)
                .close()
                .move_to(6.226, 11.551)
                .horizontal_line_to_relative(1.412)
                .vertical_line_to_relative(1.411)
                .curve_to_relative(0.0, 0.069, 0.056, 0.125, 0.125, 0.125)
                .horizontal_line_to_relative(1.422)
                .curve_to_relative(0.069, 0.0, 0.125, -0.056, 0.125, -0.125)
                .vertical_line_to_relative(-1.411)
                .horizontal_line_to_relative(1.412)
                .curve_to_relative(0.069, 0.0, 0.125, -0.056, 0.125, -0.125)
                .vertical_line_to_relative(-1.422)
                .curve_to_relative(0.0, -0.069, -0.056, -0.125, -0.125, -0.125)
                .horizontal_line_to(9.31)
                .vertical_line_to(8.468)
                .curve_to_relative(0.0, -0.069, -0.056, -0.125, -0.125, -0.125)
                .horizontal_line_to(7.763)
                .curve_to_relative(-0.069, 0.0, -0.125, 0.056, -0.125, 0.125)
                .vertical_line_to(9.88)
                .horizontal_line_to(6.226)
                .curve_to_relative(-0.069, 0.0, -0.125, 0.056, -0.125, 0.125)
                .vertical_line_to_relative(1.422)
                .curve_to(6.102, 11.495, 6.158, 11.551, 6.226, 11.551)
                .close()
                .move_to(9.656, 16.741)
                .line_to_relative(0.998, -0.998)
                .curve_to_relative(0.024, -0.024, 0.037, -0.055, 0.037, -0.088)
                .curve_to_relative(0.0, -0.033, -0.013, -0.064, -0.037, -0.088)
                .line_to_relative(-1.006, -1.005)
                .curve_to_relative(-0.048, -0.049, -0.128, -0.049, -0.176, 0.0)
                .line_to_relative(-0.998, 0.998)
                .line_to_relative(-0.998, -0.998)
                .curve_to_relative(-0.048, -0.049, -0.128, -0.049, -0.176, 0.0)
                .line_to_relative(-1.005, 1.005)
                .curve_to_relative(-0.049, 0.048, -0.049, 0.128, 0.0, 0.176)
                .line_to_relative(0.998, 0.998)
                .line_to_relative(-0.998, 0.998)
                .curve_to_relative(-0.049, 0.048, -0.049, 0.128, 0.0, 0.176)
                .line_to_relative(1.005, 1.006)
                .curve_to_relative(0.023, 0.024, 0.055, 0.037, 0.088, 0.037)
                .curve_to_relative(0.033, 0.0, 0.065, -0.013, 0.088, -0.037)
                .line_to_relative(0.998, -0.998)
                .line_to_relative(0.998, 0.998)
                .curve_to_relative(0.023, 0.024, 0.055, 0.037, 0.088, 0.037)
                .curve_to_relative(0.033, 0.0, 0.065, -0.013, 0.088, -0.037)
                .line_to_relative(1.006, -1.006)
                .curve_to_relative(0.049, -0.048, 0.049, -0.128, 0.0, -0.176)
                .line_to(9.656, 16.741)
                .close()
        })
        .build()
});

/// Icon for Calibration treatment type.
pub static IC_CALIBRATION: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcCalibration", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Calibration treatment type.")
        .path(PathStyle::new().fill(Color::from_argb(0xFFE83258)), |p| {
            p.move_to(6.327, 2.286)
                .curve_to_relative(2.218, 3.627, 5.391, 6.697, 4.873, 11.263)
                .curve_to_relative(-0.318, 2.805, -3.148, 4.523, -5.952, 3.981)
                .curve_to_relative(-2.669, -0.516, -4.511, -3.168, -3.946, -5.884)
                .curve_to(2.037, 8.118, 4.127, 5.288, 6.327, 2.286)
                .close()
                .move_to(3.558, 9.23)
                .curve_to_relative(-0.264, 0.793, -0.609, 1.57, -0.773, 2.384)
                .curve_to_relative(-0.255, 1.265, -0.081, 2.481, 0.951, 3.399)
                .curve_to_relative(0.369, 0.328, 0.846, 0.44, 1.292, 0.095)
                .curve_to_relative(0.301, -0.233, 0.335, -0.573, 0.119, -0.861)
                .curve_to(4.041, 12.766, 3.499, 11.131, 3.558, 9.23)
                .close()
                .move_to(19.586, 2.392)
                .curve_to_relative(1.335, 1.809, 2.58, 3.53, 3.098, 5.644)
                .curve_to_relative(0.348, 1.422, -0.085, 2.614, -1.291, 3.438)
                .curve_to_relative(-1.173, 0.802, -2.44, 0.815, -3.614, 0.011)
                .curve_to_relative(-1.204, -0.824, -1.64, -2.035, -1.295, -3.447)
                .curve_to(16.999, 5.928, 18.237, 4.2, 19.586, 2.392)
                .close()
                .move_to(15.679, 14.66)
                .curve_to_relative(0.992, 1.362, 1.91, 2.618, 2.264, 4.175)
                .curve_to_relative(0.234, 1.028, -0.12, 1.865, -0.976, 2.446)
                .curve_to_relative(-0.833, 0.565, -1.734, 0.581, -2.573, 0.018)
                .curve_to_relative(-0.857, -0.575, -1.226, -1.407, -0.996, -2.438)
                .curve_to(13.753, 17.282, 14.663, 16.002, 15.679, 14.66)
                .close()
        })
        .build()
});

/// Icon for Cancel Extended Bolus.
pub static IC_CANCEL_EXTENDED_BOLUS: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcCancelExtendedBolus", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Cancel Extended Bolus.")
        .path(PathStyle::new().fill(Color::from_argb(0xFFFEAF05)), |p| {
            p.move_to(19.538, 9.528)
                .line_to_relative(0.378, -0.731)
                .curve_to_relative(0.192, -0.371, 0.046, -0.828, -0.326, -1.02)
                .curve_to_relative(-0.375, -0.194, -0.828, -0.046, -1.02, 0.326)
                .line_to_relative(-0.378, 0.732)
                .curve_to_relative(-0.405, -0.158, -0.825, -0.284, -1.261, -0.367)
                .vertical_line_to(7.828)
                .curve_to_relative(0.48, -0.065, 0.857, -0.46, 0.857, -0.959)
                .curve_to_relative(0.0, -0.544, -0.44, -0.984, -0.984, -0.984)
                .horizontal_line_to_relative(-2.471)
                .curve_to_relative(-0.544, 0.0, -0.984, 0.441, -0.984, 0.984)
                .curve_to_relative(0.0, 0.498, 0.376, 0.894, 0.857, 0.959)
                .vertical_line_to_relative(0.639)
                .curve_to_relative(-3.339, 0.64, -5.871, 3.578, -5.871, 7.1)
                .curve_to_relative(0.0, 3.988, 3.245, 7.233, 7.233, 7.233)
                .curve_to_relative(3.988, 0.0, 7.233, -3.245, 7.233, -7.233)
                .curve_to(22.8, 13.045, 21.5, 10.823, 19.538, 9.528)
                .close()
                .move_to(15.567, 21.732)
                .curve_to_relative(-3.399, 0.0, -6.165, -2.765, -6.165, -6.164)
                .reflective_curve_to_relative(2.765, -6.165, 6.165, -6.165)
                .reflective_curve_to_relative(6.164, 2.765, 6.164, 6.165)
                .reflective_curve_to(18.967, 21.732, 15.567, 21.732)
                .close()
                .move_to(15.569, 10.722)
                .curve_to_relative(-0.092, 0.0, -0.181, 0.037, -0.246, 0.102)
                .curve_to_relative(-0.065, 0.065, -0.102, 0.154, -0.102, 0.246)
                .vertical_line_to_relative(4.486)
                .curve_to_relative(0.0, 0.086, 0.031, 0.168, 0.088, 0.232)
                .line_to_relative(2.979, 3.354)
                .curve_to_relative(0.062, 0.069, 0.148, 0.111, 0.241, 0.116)
                .curve_to_relative(0.006, 0.001, 0.014, 0.001, 0.02, 0.001)
                .curve_to_relative(0.086, 0.0, 0.168, -0.031, 0.232, -0.089)
                .curve_to_relative(1.037, -0.925, 1.632, -2.238, 1.632, -3.603)
                .curve_to(20.413, 12.897, 18.24, 10.723, 15.569, 10.722)
                .close()
        })
        .path(PathStyle::new().fill(Color::from_argb(0xFFFDAE04)), |p| {
            p.move_to(1.884, 10.1)
                .curve_to_relative(-0.175, 0.0, -0.35, -0.067, -0.484, -0.2)
                .curve_to(1.133, 9.633, 1.133, 9.201, 1.401, 8.934)
                .line_to(8.934, 1.4)
                .curve_to_relative(0.268, -0.267, 0.699, -0.267, 0.967, 0.001)
                .curve_to(10.168, 1.668, 10.168, 2.1, 9.9, 2.368)
                .line_to(2.367, 9.9)
                .curve_to(2.233, 10.033, 2.058, 10.1, 1.884, 10.1)
                .close()
                .move_to(9.418, 10.1)
                .curve_to_relative(-0.175, 0.0, -0.35, -0.067, -0.484, -0.2)
                .line_to(1.401, 2.368)
                .curve_to(1.133, 2.1, 1.133, 1.668, 1.4, 1.401)
                .curve_to(1.667, 1.133, 2.099, 1.133, 2.367, 1.4)
                .line_to(9.9, 8.934)
                .curve_to_relative(0.267, 0.267, 0.267, 0.699, 0.001, 0.966)
                .curve_to(9.768, 10.033, 9.592, 10.1, 9.418, 10.1)
                .close()
        })
        .build()
});

/// Icon for Canula change treatment type.
pub static IC_CANULA_CHANGE: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcCanulaChange", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Canula change treatment type.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF67DFE8)), |p| {
            p.move_to(22.768, 7.141)
                .curve_to_relative(-0.137, -0.5, -0.672, -0.788, -1.194, -0.645)
                .line_to_relative(-2.346, 0.645)
                .curve_to_relative(-0.3, -0.843, -1.201, -1.327, -2.082, -1.085)
                .line_to_relative(-2.776, 0.763)
                .curve_to_relative(-0.881, 0.242, -1.407, 1.118, -1.235, 1.996)
                .line_to(10.788, 9.46)
                .curve_to_relative(-0.46, 0.127, -0.738, 0.548, -0.708, 0.988)
                .curve_to_relative(-1.565, 0.406, -2.803, 0.062, -3.785, -0.229)
                .curve_to_relative(-0.966, -0.286, -1.801, -0.533, -2.504, 0.14)
                .curve_to_relative(-1.207, 1.157, -0.341, 2.649, 0.355, 3.849)
                .curve_to_relative(0.462, 0.796, 0.94, 1.621, 0.707, 2.123)
                .curve_to_relative(-0.479, 1.038, -2.519, 1.041, -3.265, 0.954)
                .curve_to_relative(-0.187, -0.02, -0.362, 0.113, -0.385, 0.303)
                .curve_to_relative(-0.022, 0.19, 0.113, 0.361, 0.303, 0.383)
                .curve_to_relative(0.079, 0.009, 1.27, 0.14, 2.357, -0.158)
                .curve_to_relative(0.677, -0.186, 1.314, -0.54, 1.618, -1.193)
                .curve_to_relative(0.384, -0.827, -0.16, -1.764, -0.736, -2.757)
                .curve_to_relative(-0.779, -1.344, -1.233, -2.279, -0.475, -3.006)
                .curve_to_relative(0.393, -0.377, 0.897, -0.251, 1.825, 0.024)
                .curve_to_relative(1.042, 0.308, 2.445, 0.746, 4.314, 0.198)
                .curve_to_relative(0.236, 0.19, 0.552, 0.28, 0.876, 0.191)
                .line_to_relative(5.196, -1.428)
                .line_to_relative(1.861, 6.773)
                .line_to_relative(0.118, -1.11)
                .line_to_relative(-1.586, -5.771)
                .line_to_relative(5.196, -1.428)
                .curve_to(22.593, 8.162, 22.905, 7.64, 22.768, 7.141)
                .close()
        })
        .build()
});

/// Icon for Carbs treatment type.
pub static IC_CARBS: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcCarbs", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Carbs treatment type.")
        .path(PathStyle::new().fill(Color::from_argb(0xFFFEAF05)), |p| {
            p.move_to(18.885, 15.904)
                .curve_to_relative(-0.607, 0.761, -1.263, 1.32, -1.992, 1.815)
                .curve_to_relative(-0.691, 0.469, -1.542, 0.712, -2.199, 0.855)
                .curve_to_relative(-1.257, 0.229, -0.457, 0.343, 0.175, 1.201)
                .curve_to_relative(-2.279, 3.255, -6.121, 3.472, -9.326, 1.811)
                .curve_to_relative(-0.257, -0.133, -0.498, -0.301, -0.737, -0.466)
                .curve_to(4.3, 20.773, 4.078, 20.69, 3.655, 21.127)
                .curve_to_relative(-0.342, 0.354, -1.148, 1.13, -1.558, 1.532)
                .line_to(1.2, 21.687)
                .curve_to_relative(0.44, -0.4, 0.948, -0.897, 1.312, -1.239)
                .curve_to_relative(0.795, -0.747, 0.614, -0.837, -0.02, -1.745)
                .curve_to_relative(-2.204, -3.153, -1.529, -7.269, 1.57, -9.572)
                .curve_to_relative(1.32, 0.845, 1.035, 0.645, 1.464, -0.598)
                .curve_to_relative(0.458, -1.327, 1.238, -2.459, 2.422, -3.248)
                .curve_to_relative(1.204, 1.064, 1.004, 0.578, 1.488, -0.642)
                .curve_to_relative(0.523, -1.319, 1.342, -2.393, 2.473, -3.301)
                .curve_to_relative(1.271, 0.837, 1.854, 1.767, 2.289, 2.812)
                .curve_to_relative(0.499, 1.198, 0.692, 0.796, 1.568, -0.054)
                .curve_to_relative(1.87, -1.813, 4.155, -2.533, 6.383, -1.987)
                .curve_to_relative(0.524, 2.899, -0.714, 5.493, -3.399, 7.188)
                .curve_to_relative(1.409, 0.381, 2.742, 1.143, 4.05, 2.684)
                .curve_to_relative(-0.802, 1.175, -2.217, 2.302, -3.644, 2.541)
                .curve_to(17.114, 14.868, 18.264, 14.946, 18.885, 15.904)
                .close()
                .move_to(20.915, 4.178)
                .curve_to_relative(0.023, -0.808, -0.233, -1.023, -0.933, -0.929)
                .curve_to_relative(-2.274, 0.305, -4.411, 2.347, -4.791, 4.577)
                .curve_to_relative(-0.131, 0.771, 0.274, 1.184, 1.044, 1.007)
                .curve_to_relative(0.489, -0.113, 0.983, -0.263, 1.431, -0.485)
                .curve_to(19.462, 7.457, 20.578, 6.034, 20.915, 4.178)
                .close()
                .move_to(13.739, 7.363)
                .curve_to_relative(0.02, -1.277, -0.422, -2.3, -1.034, -3.261)
                .curve_to_relative(-0.589, -0.925, -0.998, -0.922, -1.587, -0.021)
                .curve_to_relative(-1.36, 2.081, -0.807, 4.5, 0.277, 6.276)
                .curve_to_relative(0.347, 0.568, 0.814, 0.573, 1.222, 0.02)
                .curve_to(13.297, 9.457, 13.764, 8.442, 13.739, 7.363)
                .close()
                .move_to(9.473, 21.345)
                .curve_to_relative(0.945, 0.0, 2.276, -0.426, 2.957, -0.942)
                .curve_to_relative(0.58, -0.439, 0.628, -0.797, 0.055, -1.192)
                .curve_to_relative(-2.128, -1.467, -4.303, -1.786, -6.553, -0.218)
                .curve_to_relative(-0.757, 0.528, -0.714, 0.957, 0.115, 1.444)
                .curve_to(7.103, 21.059, 8.257, 21.32, 9.473, 21.345)
                .close()
                .move_to(9.809, 11.176)
                .curve_to_relative(0.036, -1.216, -0.422, -2.272, -1.041, -3.265)
                .curve_to_relative(-0.577, -0.927, -0.972, -0.905, -1.562, 0.046)
                .curve_to_relative(-1.137, 1.835, -1.041, 4.403, 0.23, 6.16)
                .curve_to_relative(0.441, 0.61, 0.821, 0.649, 1.292, 0.055)
                .curve_to(9.42, 13.299, 9.834, 12.308, 9.809, 11.176)
                .close()
                .move_to(17.046, 13.63)
                .curve_to_relative(1.209, -0.005, 2.524, -0.396, 3.21, -0.918)
                .curve_to_relative(0.586, -0.445, 0.602, -0.736, 0.066, -1.206)
                .curve_to_relative(-1.711, -1.5, -4.815, -1.597, -6.59, -0.207)
                .curve_to_relative(-0.642, 0.503, -0.654, 0.963, 0.034, 1.347)
                .curve_to(14.819, 13.235, 15.934, 13.665, 17.046, 13.63)
                .close()
                .move_to(2.523, 14.762)
                .curve_to_relative(-0.043, 1.002, 0.227, 2.04, 0.817, 2.984)
                .curve_to_relative(0.558, 0.893, 1.039, 0.903, 1.632, 0.066)
                .curve_to_relative(1.288, -1.819, 1.179, -4.583, -0.247, -6.285)
                .curve_to_relative(-0.465, -0.555, -0.861, -0.552, -1.304, 0.056)
                .curve_to(2.76, 12.493, 2.51, 13.535, 2.523, 14.762)
                .close()
                .move_to(12.957, 14.157)
                .curve_to_relative(-1.219, -0.057, -2.285, 0.352, -3.235, 1.076)
                .curve_to_relative(-0.475, 0.362, -0.495, 0.76, -0.009, 1.162)
                .curve_to_relative(1.558, 1.287, 4.921, 1.398, 6.579, 0.208)
                .curve_to_relative(0.671, -0.481, 0.688, -0.881, 0.009, -1.327)
                .curve_to(15.287, 14.609, 14.202, 14.127, 12.957, 14.157)
                .close()
        })
        .build()
});

/// Icon for CGM insert treatment type.
pub static IC_CGM_INSERT: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcCgmInsert", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for CGM insert treatment type.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF67DFE8)), |p| {
            p.move_to(22.395, 7.073)
                .line_to_relative(-1.81, -1.844)
                .line_to(6.924, 5.742)
                .curve_to_relative(-1.555, 0.021, -2.648, 0.927, -2.99, 1.754)
                .curve_to(2.66, 8.461, 1.273, 10.1, 1.209, 10.763)
                .curve_to_relative(-0.035, 0.365, 0.039, 0.652, 0.221, 0.852)
                .curve_to_relative(0.106, 0.117, 0.299, 0.257, 0.612, 0.257)
                .horizontal_line_to_relative(18.743)
                .curve_to_relative(0.735, 0.0, 1.31, -0.737, 1.31, -1.678)
                .curve_to_relative(0.0, -0.066, -0.012, -0.14, -0.029, -0.218)
                .curve_to_relative(0.226, -0.184, 0.411, -0.438, 0.541, -0.753)
                .curve_to(22.931, 8.442, 22.838, 7.516, 22.395, 7.073)
                .close()
                .move_to(4.982, 7.508)
                .curve_to(5.147, 7.31, 5.777, 6.661, 6.947, 6.645)
                .line_to_relative(13.272, -0.498)
                .line_to_relative(1.534, 1.562)
                .curve_to_relative(0.142, 0.142, 0.222, 0.681, 0.02, 1.169)
                .curve_to_relative(-0.149, 0.36, -0.383, 0.542, -0.696, 0.542)
                .horizontal_line_to_relative(-2.813)
                .line_to_relative(-2.437, -0.582)
                .horizontal_line_to_relative(-2.23)
                .curve_to_relative(-0.469, 0.0, -0.714, -0.154, -0.729, -0.459)
                .line_to_relative(-0.021, -0.43)
                .line_to_relative(-8.115, 0.0)
                .curve_to(4.756, 7.854, 4.827, 7.695, 4.982, 7.508)
                .close()
                .move_to(20.785, 10.968)
                .line_to_relative(-18.681, 0.0)
                .curve_to_relative(-0.002, -0.026, -0.002, -0.061, 0.002, -0.106)
                .curve_to_relative(0.063, -0.283, 0.9, -1.393, 1.92, -2.278)
                .curve_to(4.177, 8.75, 4.402, 8.848, 4.677, 8.853)
                .horizontal_line_to_relative(7.373)
                .curve_to_relative(0.205, 0.558, 0.764, 0.889, 1.547, 0.889)
                .horizontal_line_to_relative(2.123)
                .line_to_relative(2.437, 0.582)
                .horizontal_line_to_relative(2.919)
                .curve_to_relative(0.036, 0.0, 0.072, -0.002, 0.108, -0.004)
                .curve_to(21.146, 10.724, 20.939, 10.968, 20.785, 10.968)
                .close()
                .move_to(15.113, 15.365)
                .curve_to_relative(-0.171, -0.2, -0.473, -0.223, -0.673, -0.053)
                .line_to_relative(-2.276, 1.945)
                .vertical_line_to_relative(-4.179)
                .curve_to_relative(0.0, -0.264, -0.214, -0.478, -0.478, -0.478)
                .curve_to_relative(-0.264, 0.0, -0.478, 0.214, -0.478, 0.478)
                .vertical_line_to_relative(4.179)
                .line_to(8.93, 15.312)
                .curve_to_relative(-0.2, -0.171, -0.502, -0.148, -0.673, 0.053)
                .curve_to_relative(-0.172, 0.201, -0.148, 0.502, 0.053, 0.673)
                .line_to_relative(3.065, 2.618)
                .curve_to_relative(0.024, 0.02, 0.051, 0.03, 0.077, 0.045)
                .curve_to_relative(0.018, 0.01, 0.034, 0.023, 0.053, 0.031)
                .curve_to_relative(0.058, 0.024, 0.119, 0.039, 0.18, 0.039)
                .curve_to_relative(0.062, 0.0, 0.122, -0.015, 0.18, -0.039)
                .curve_to_relative(0.019, -0.008, 0.035, -0.021, 0.053, -0.031)
                .curve_to_relative(0.026, -0.015, 0.054, -0.025, 0.077, -0.045)
                .line_to_relative(3.065, -2.618)
                .curve_to(15.26, 15.866, 15.284, 15.565, 15.113, 15.365)
                .close()
        })
        .build()
});

/// Icon for Extended Bolus.
pub static IC_EXTENDED_BOLUS: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcExtendedBolus", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Extended Bolus.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF67DFE8)), |p| {
            p.move_to(17.07, 5.852)
                .line_to_relative(0.482, -0.934)
                .curve_to_relative(0.245, -0.474, 0.059, -1.058, -0.416, -1.303)
                .curve_to_relative(-0.478, -0.247, -1.058, -0.059, -1.303, 0.416)
                .line_to_relative(-0.483, 0.935)
                .curve_to_relative(-0.517, -0.202, -1.054, -0.362, -1.61, -0.469)
                .vertical_line_to(3.681)
                .curve_to_relative(0.614, -0.083, 1.094, -0.588, 1.094, -1.224)
                .curve_to_relative(0.0, -0.694, -0.562, -1.257, -1.256, -1.257)
                .horizontal_line_to_relative(-3.155)
                .curve_to_relative(-0.694, 0.0, -1.257, 0.563, -1.257, 1.257)
                .curve_to_relative(0.0, 0.637, 0.481, 1.141, 1.095, 1.224)
                .vertical_line_to_relative(0.816)
                .curve_to_relative(-4.263, 0.817, -7.496, 4.569, -7.496, 9.067)
                .curve_to_relative(0.0, 5.092, 4.144, 9.236, 9.236, 9.236)
                .curve_to_relative(5.092, 0.0, 9.236, -4.144, 9.236, -9.236)
                .curve_to(21.236, 10.343, 19.576, 7.506, 17.07, 5.852)
                .close()
                .move_to(12.0, 21.436)
                .curve_to_relative(-4.341, 0.0, -7.872, -3.531, -7.872, -7.872)
                .reflective_curve_to(7.66, 5.692, 12.0, 5.692)
                .reflective_curve_to_relative(7.872, 3.531, 7.872, 7.872)
                .reflective_curve_to(16.341, 21.436, 12.0, 21.436)
                .close()
                .move_to(12.003, 7.377)
                .curve_to_relative(-0.118, 0.0, -0.231, 0.047, -0.314, 0.131)
                .curve_to_relative(-0.083, 0.083, -0.131, 0.197, -0.131, 0.314)
                .vertical_line_to_relative(5.728)
                .curve_to_relative(0.0, 0.109, 0.04, 0.215, 0.113, 0.296)
                .line_to_relative(3.805, 4.283)
                .curve_to_relative(0.079, 0.088, 0.189, 0.141, 0.308, 0.148)
                .curve_to_relative(0.008, 0.001, 0.017, 0.001, 0.025, 0.001)
                .curve_to_relative(0.109, 0.0, 0.215, -0.04, 0.296, -0.113)
                .curve_to_relative(1.324, -1.182, 2.084, -2.858, 2.084, -4.601)
                .curve_to(18.188, 10.154, 15.414, 7.379, 12.003, 7.377)
                .close()
        })
        .build()
});

/// Icon for History Browser.
pub static IC_HISTORY: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcHistory", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for History Browser.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF67DFE8)), |p| {
            p.move_to(13.198, 2.399)
                .curve_to_relative(-5.107, 0.0, -9.283, 4.011, -9.573, 9.047)
                .line_to(2.529, 10.35)
                .curve_to_relative(-0.305, -0.304, -0.797, -0.304, -1.101, 0.0)
                .curve_to_relative(-0.304, 0.305, -0.304, 0.797, 0.0, 1.101)
                .line_to_relative(2.397, 2.396)
                .curve_to_relative(0.152, 0.151, 0.352, 0.228, 0.551, 0.228)
                .curve_to_relative(0.199, 0.0, 0.399, -0.076, 0.551, -0.228)
                .line_to_relative(2.396, -2.396)
                .curve_to_relative(0.304, -0.304, 0.304, -0.797, 0.0, -1.101)
                .curve_to_relative(-0.304, -0.304, -0.797, -0.304, -1.101, 0.0)
                .line_to_relative(-1.036, 1.036)
                .curve_to_relative(0.316, -4.149, 3.785, -7.431, 8.013, -7.431)
                .curve_to_relative(4.436, 0.0, 8.045, 3.609, 8.045, 8.045)
                .curve_to_relative(0.0, 4.436, -3.609, 8.045, -8.045, 8.045)
                .curve_to_relative(-2.19, 0.0, -4.239, -0.869, -5.77, -2.448)
                .curve_to_relative(-0.3, -0.308, -0.793, -0.315, -1.101, -0.017)
                .curve_to_relative(-0.309, 0.299, -0.316, 0.793, -0.017, 1.101)
                .curve_to_relative(1.827, 1.883, 4.273, 2.92, 6.888, 2.92)
                .curve_to_relative(5.294, 0.0, 9.602, -4.307, 9.602, -9.602)
                .reflective_curve_to(18.493, 2.399, 13.198, 2.399)
                .close()
                .move_to(13.198, 12.778)
                .horizontal_line_to_relative(4.348)
                .curve_to_relative(0.43, 0.0, 0.778, -0.349, 0.778, -0.778)
                .curve_to_relative(0.0, -0.43, -0.348, -0.778, -0.778, -0.778)
                .horizontal_line_to_relative(-3.57)
                .vertical_line_to(6.202)
                .curve_to_relative(0.0, -0.43, -0.349, -0.778, -0.778, -0.778)
                .reflective_curve_to_relative(-0.778, 0.348, -0.778, 0.777)
                .vertical_line_to(12.0)
                .curve_to(12.42, 12.429, 12.769, 12.778, 13.198, 12.778)
                .close()
        })
        .build()
});

/// Icon for LGS (Low Glucose Suspend) Loop.
pub static IC_LOOP_LGS: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcLoopLgs", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for LGS (Low Glucose Suspend) Loop.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(5.437, 7.639)
                .curve_to_relative(0.401, -0.533, 0.875, -1.006, 1.409, -1.405)
                .line_to(5.468, 3.852)
                .curve_to_relative(-0.94, 0.657, -1.758, 1.475, -2.416, 2.414)
                .line_to(5.437, 7.639)
                .close()
                .move_to(8.299, 5.388)
                .curve_to_relative(0.603, -0.257, 1.251, -0.429, 1.927, -0.509)
                .line_to_relative(-0.003, -2.747)
                .curve_to(9.052, 2.231, 7.943, 2.54, 6.926, 3.016)
                .line_to(8.299, 5.388)
                .close()
                .move_to(11.903, 2.153)
                .line_to_relative(0.003, 2.728)
                .curve_to_relative(0.741, 0.091, 1.448, 0.296, 2.1, 0.598)
                .curve_to_relative(0.32, 0.148, 0.629, 0.316, 0.921, 0.508)
                .line_to_relative(0.002, -0.002)
                .line_to_relative(-0.346, -1.755)
                .line_to_relative(1.845, -0.529)
                .curve_to(15.11, 2.833, 13.563, 2.298, 11.903, 2.153)
                .close()
                .move_to(4.074, 11.015)
                .curve_to(4.156, 10.34, 4.329, 9.693, 4.588, 9.09)
                .line_to(2.214, 7.722)
                .curve_to_relative(-0.477, 1.017, -0.788, 2.125, -0.888, 3.296)
                .line_to(4.074, 11.015)
                .close()
                .move_to(22.8, 9.19)
                .line_to_relative(-5.687, -3.903)
                .line_to_relative(-1.306, 6.578)
                .line_to_relative(2.068, -1.728)
                .curve_to_relative(0.014, 0.055, 0.03, 0.109, 0.042, 0.165)
                .curve_to_relative(0.114, 0.503, 0.18, 1.025, 0.18, 1.563)
                .curve_to_relative(0.0, 3.888, -3.152, 7.039, -7.039, 7.039)
                .curve_to_relative(-2.307, 0.0, -4.348, -1.114, -5.632, -2.829)
                .line_to_relative(-2.382, 1.378)
                .curve_to_relative(1.767, 2.529, 4.695, 4.186, 8.013, 4.186)
                .curve_to_relative(5.399, 0.0, 9.775, -4.376, 9.775, -9.775)
                .curve_to_relative(0.0, -0.747, -0.091, -1.471, -0.25, -2.17)
                .curve_to_relative(-0.039, -0.173, -0.084, -0.344, -0.132, -0.514)
                .line_to(22.8, 9.19)
                .line_to(22.8, 9.19)
                .close()
                .move_to(4.58, 14.624)
                .curve_to_relative(-0.257, -0.604, -0.429, -1.252, -0.509, -1.928)
                .line_to_relative(-2.747, 0.003)
                .curve_to_relative(0.099, 1.172, 0.408, 2.281, 0.883, 3.298)
                .line_to(4.58, 14.624)
                .close()
        })
        .build()
});

/// Icon for Reconnect Loop.
pub static IC_LOOP_RECONNECT: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcLoopReconnect", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Reconnect Loop.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(22.8, 9.19)
                .line_to_relative(-5.687, -3.903)
                .line_to_relative(-1.306, 6.578)
                .line_to_relative(2.068, -1.728)
                .curve_to_relative(0.014, 0.055, 0.03, 0.109, 0.042, 0.165)
                .curve_to_relative(0.114, 0.503, 0.18, 1.025, 0.18, 1.563)
                .curve_to_relative(0.0, 3.888, -3.152, 7.039, -7.039, 7.039)
                .curve_to_relative(-3.888, 0.0, -7.039, -3.152, -7.039, -7.039)
                .curve_to_relative(0.0, -3.888, 3.152, -7.039, 7.039, -7.039)
                .curve_to_relative(1.054, 0.0, 2.051, 0.238, 2.949, 0.654)
                .curve_to_relative(0.32, 0.148, 0.629, 0.316, 0.921, 0.508)
                .line_to_relative(0.002, -0.002)
                .line_to_relative(-0.346, -1.755)
                .line_to_relative(1.845, -0.529)
                .curve_to_relative(-1.542, -1.017, -3.386, -1.612, -5.371, -1.612)
                .curve_to_relative(-5.399, 0.0, -9.775, 4.376, -9.775, 9.775)
                .curve_to_relative(0.0, 5.399, 4.376, 9.775, 9.775, 9.775)
                .curve_to_relative(5.399, 0.0, 9.775, -4.376, 9.775, -9.775)
                .curve_to_relative(0.0, -0.747, -0.091, -1.471, -0.25, -2.17)
                .curve_to_relative(-0.039, -0.173, -0.084, -0.344, -0.132, -0.514)
                .line_to(22.8, 9.19)
                .line_to(22.8, 9.19)
                .close()
                .move_to(13.818, 21.792)
                .curve_to_relative(0.781, 0.0, 1.466, -0.411, 1.94, -1.036)
                .line_to_relative(-0.001, -3.862)
                .curve_to_relative(-0.474, -0.624, -1.158, -1.034, -1.937, -1.035)
                .line_to_relative(-5.52, -0.001)
                .curve_to_relative(-0.78, 0.0, -1.463, 0.409, -1.938, 1.033)
                .line_to_relative(-0.004, 3.862)
                .curve_to_relative(0.474, 0.626, 1.159, 1.038, 1.94, 1.038)
                .close()
        })
        .build()
});

/// Icon for Superbolus Loop.
pub static IC_LOOP_SUPERBOLUS: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcLoopSuperbolus", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Superbolus Loop.")
        .path(PathStyle::new().fill(Color::BLACK), |p| {
            p.move_to(22.8, 9.19)
                .line_to_relative(-5.687, -3.903)
                .line_to_relative(-1.306, 6.578)
                .line_to_relative(2.068, -1.728)
                .curve_to_relative(0.014, 0.055, 0.03, 0.109, 0.042, 0.165)
                .curve_to_relative(0.114, 0.503, 0.18, 1.025, 0.18, 1.563)
                .curve_to_relative(0.0, 3.888, -3.152, 7.039, -7.039, 7.039)
                .curve_to_relative(-3.888, 0.0, -7.039, -3.152, -7.039, -7.039)
                .curve_to_relative(0.0, -3.888, 3.152, -7.039, 7.039, -7.039)
                .curve_to_relative(1.054, 0.0, 2.051, 0.238, 2.949, 0.654)
                .curve_to_relative(0.32, 0.148, 0.629, 0.316, 0.921, 0.508)
                .line_to_relative(0.002, -0.002)
                .line_to_relative(-0.346, -1.755)
                .line_to_relative(1.845, -0.529)
                .curve_to_relative(-1.542, -1.017, -3.386, -1.612, -5.371, -1.612)
                .curve_to_relative(-5.399, 0.0, -9.775, 4.376, -9.775, 9.775)
                .curve_to_relative(0.0, 5.399, 4.376, 9.775, 9.775, 9.775)
                .curve_to_relative(5.399, 0.0, 9.775, -4.376, 9.775, -9.775)
                .curve_to_relative(0.0, -0.747, -0.091, -1.471, -0.25, -2.17)
                .curve_to_relative(-0.039, -0.173, -0.084, -0.344, -0.132, -0.514)
                .line_to(22.8, 9.19)
                .line_to(22.8, 9.19)
                .close()
                .move_to(13.972, 13.491)
                .curve_to_relative(-0.262, 0.329, -0.546, 0.571, -0.861, 0.785)
                .curve_to_relative(-0.299, 0.203, -0.667, 0.308, -0.951, 0.37)
                .curve_to_relative(-0.543, 0.099, -0.198, 0.148, 0.076, 0.519)
                .curve_to_relative(-0.985, 1.407, -2.646, 1.501, -4.031, 0.783)
                .curve_to_relative(-0.111, -0.058, -0.215, -0.13, -0.319, -0.201)
                .curve_to_relative(-0.218, -0.15, -0.315, -0.186, -0.498, 0.003)
                .curve_to_relative(-0.148, 0.153, -0.496, 0.488, -0.673, 0.662)
                .line_to_relative(-0.388, -0.42)
                .curve_to_relative(0.19, -0.173, 0.41, -0.388, 0.567, -0.536)
                .curve_to_relative(0.344, -0.323, 0.266, -0.362, -0.009, -0.754)
                .curve_to_relative(-0.953, -1.363, -0.661, -3.142, 0.679, -4.138)
                .curve_to_relative(0.571, 0.365, 0.447, 0.279, 0.633, -0.258)
                .curve_to_relative(0.198, -0.573, 0.535, -1.063, 1.047, -1.404)
                .curve_to_relative(0.521, 0.46, 0.434, 0.25, 0.643, -0.277)
                .curve_to_relative(0.226, -0.57, 0.58, -1.035, 1.069, -1.427)
                .curve_to_relative(0.55, 0.362, 0.801, 0.764, 0.989, 1.215)
                .curve_to_relative(0.216, 0.518, 0.299, 0.344, 0.678, -0.023)
                .curve_to_relative(0.808, -0.784, 1.796, -1.095, 2.759, -0.859)
                .curve_to_relative(0.226, 1.253, -0.308, 2.375, -1.469, 3.107)
                .curve_to_relative(0.609, 0.165, 1.185, 0.494, 1.751, 1.16)
                .curve_to_relative(-0.347, 0.508, -0.958, 0.995, -1.575, 1.098)
                .curve_to(13.207, 13.044, 13.704, 13.077, 13.972, 13.491)
                .close()
                .move_to(14.85, 8.422)
                .curve_to_relative(0.01, -0.349, -0.101, -0.442, -0.403, -0.401)
                .curve_to_relative(-0.983, 0.132, -1.907, 1.014, -2.071, 1.978)
                .curve_to_relative(-0.057, 0.333, 0.119, 0.512, 0.451, 0.435)
                .curve_to_relative(0.211, -0.049, 0.425, -0.114, 0.618, -0.21)
                .curve_to(14.222, 9.84, 14.704, 9.225, 14.85, 8.422)
                .close()
                .move_to(11.748, 9.799)
                .curve_to_relative(0.009, -0.552, -0.182, -0.994, -0.447, -1.41)
                .curve_to_relative(-0.254, -0.4, -0.431, -0.399, -0.686, -0.009)
                .curve_to_relative(-0.588, 0.899, -0.349, 1.945, 0.12, 2.713)
                .curve_to_relative(0.15, 0.246, 0.352, 0.248, 0.528, 0.009)
                .curve_to(11.557, 10.704, 11.759, 10.265, 11.748, 9.799)
                .close()
                .move_to(9.904, 15.843)
                .curve_to_relative(0.408, 0.0, 0.984, -0.184, 1.278, -0.407)
                .curve_to_relative(0.251, -0.19, 0.271, -0.345, 0.024, -0.515)
                .curve_to_relative(-0.92, -0.634, -1.86, -0.772, -2.833, -0.094)
                .curve_to_relative(-0.327, 0.228, -0.309, 0.414, 0.05, 0.624)
                .curve_to(8.879, 15.72, 9.378, 15.833, 9.904, 15.843)
                .close()
                .move_to(10.049, 11.448)
                .curve_to_relative(0.015, -0.526, -0.183, -0.982, -0.45, -1.412)
                .curve_to_relative(-0.249, -0.401, -0.42, -0.391, -0.675, 0.02)
                .curve_to_relative(-0.492, 0.793, -0.45, 1.903, 0.099, 2.663)
                .curve_to_relative(0.191, 0.264, 0.355, 0.28, 0.558, 0.024)
                .curve_to(9.881, 12.365, 10.06, 11.937, 10.049, 11.448)
                .close()
                .move_to(13.177, 12.508)
                .curve_to_relative(0.523, -0.002, 1.091, -0.171, 1.388, -0.397)
                .curve_to_relative(0.253, -0.192, 0.26, -0.318, 0.028, -0.521)
                .curve_to_relative(-0.74, -0.648, -2.082, -0.69, -2.849, -0.09)
                .curve_to_relative(-0.278, 0.217, -0.283, 0.416, 0.015, 0.582)
                .curve_to(12.215, 12.338, 12.697, 12.523, 13.177, 12.508)
                .close()
                .move_to(6.9, 12.997)
                .curve_to_relative(-0.019, 0.433, 0.098, 0.882, 0.353, 1.29)
                .curve_to_relative(0.241, 0.386, 0.449, 0.391, 0.706, 0.029)
                .curve_to_relative(0.557, -0.786, 0.51, -1.981, -0.107, -2.717)
                .curve_to_relative(-0.201, -0.24, -0.372, -0.239, -0.564, 0.024)
                .curve_to(7.002, 12.017, 6.894, 12.467, 6.9, 12.997)
                .close()
                .move_to(11.41, 12.736)
                .curve_to_relative(-0.527, -0.025, -0.988, 0.152, -1.398, 0.465)
                .curve_to_relative(-0.206, 0.157, -0.214, 0.329, -0.004, 0.502)
                .curve_to_relative(0.674, 0.556, 2.127, 0.604, 2.844, 0.09)
                .curve_to_relative(0.29, -0.208, 0.297, -0.381, 0.004, -0.574)
                .curve_to(12.417, 12.932, 11.948, 12.723, 11.41, 12.736)
                .close()
        })
        .build()
});

/// Icon for Note treatment type.
pub static IC_NOTE: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcNote", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Note treatment type.")
        .path(PathStyle::new().fill(Color::from_argb(0xFFFEAF05)), |p| {
            p.move_to(14.934, 1.727)
                .line_to(2.84, 13.822)
                .curve_to_relative(-0.096, 0.096, -0.161, 0.22, -0.186, 0.354)
                .line_to(1.211, 22.005)
                .curve_to_relative(-0.04, 0.218, 0.029, 0.442, 0.186, 0.598)
                .curve_to_relative(0.157, 0.157, 0.38, 0.226, 0.598, 0.186)
                .line_to_relative(7.829, -1.443)
                .curve_to_relative(0.134, -0.025, 0.258, -0.09, 0.354, -0.186)
                .line_to(22.273, 9.066)
                .curve_to_relative(0.705, -0.705, 0.703, -1.854, -0.004, -2.561)
                .line_to_relative(-4.772, -4.772)
                .curve_to(16.789, 1.024, 15.639, 1.022, 14.934, 1.727)
                .close()
                .move_to(8.57, 19.491)
                .curve_to_relative(0.154, 0.154, 0.21, 0.381, 0.144, 0.589)
                .curve_to_relative(-0.029, 0.091, -0.079, 0.172, -0.144, 0.237)
                .curve_to_relative(-0.083, 0.083, -0.191, 0.141, -0.311, 0.162)
                .line_to_relative(-3.901, 0.689)
                .curve_to_relative(-0.387, -0.012, -0.771, -0.163, -1.066, -0.459)
                .curve_to_relative(-0.296, -0.296, -0.447, -0.679, -0.459, -1.066)
                .line_to_relative(0.689, -3.901)
                .curve_to_relative(0.038, -0.215, 0.192, -0.39, 0.4, -0.455)
                .curve_to_relative(0.208, -0.065, 0.434, -0.01, 0.589, 0.144)
                .line_to(8.57, 19.491)
                .close()
                .move_to(21.263, 7.358)
                .curve_to_relative(0.223, 0.223, 0.223, 0.584, 0.0, 0.807)
                .line_to(10.575, 18.852)
                .curve_to_relative(-0.223, 0.223, -0.584, 0.223, -0.807, 0.0)
                .line_to_relative(-0.42, -0.42)
                .curve_to_relative(-0.223, -0.223, -0.223, -0.584, 0.0, -0.807)
                .line_to(20.036, 6.938)
                .curve_to_relative(0.223, -0.223, 0.584, -0.223, 0.807, 0.0)
                .line_to(21.263, 7.358)
                .close()
                .move_to(19.179, 5.241)
                .curve_to_relative(0.223, 0.223, 0.223, 0.584, 0.0, 0.807)
                .line_to(8.492, 16.735)
                .curve_to_relative(-0.223, 0.223, -0.584, 0.223, -0.807, 0.0)
                .line_to_relative(-0.42, -0.42)
                .curve_to_relative(-0.223, -0.223, -0.223, -0.584, 0.0, -0.807)
                .line_to(17.952, 4.821)
                .curve_to_relative(0.223, -0.223, 0.584, -0.223, 0.807, 0.0)
                .line_to(19.179, 5.241)
                .close()
                .move_to(17.095, 3.124)
                .curve_to_relative(0.223, 0.223, 0.223, 0.584, 0.0, 0.807)
                .line_to(6.408, 14.618)
                .curve_to_relative(-0.223, 0.223, -0.584, 0.223, -0.807, 0.0)
                .line_to_relative(-0.42, -0.42)
                .curve_to_relative(-0.223, -0.223, -0.223, -0.584, 0.0, -0.807)
                .line_to(15.869, 2.704)
                .curve_to_relative(0.223, -0.223, 0.584, -0.223, 0.807, 0.0)
                .line_to(17.095, 3.124)
                .close()
        })
        .build()
});

/// Icon for Automation Plugin.
pub static IC_PLUGIN_AUTOMATION: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginAutomation", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Automation Plugin.")
        .path(PathStyle::new().fill(Color::WHITE), |p| {
            p.move_to(16.114, 12.514)
                .curve_to_relative(-2.839, 0.0, -5.143, 2.304, -5.143, 5.143)
                .reflective_curve_to_relative(2.304, 5.143, 5.143, 5.143)
                .reflective_curve_to_relative(5.143, -2.304, 5.143, -5.143)
                .reflective_curve_to(18.953, 12.514, 16.114, 12.514)
                .close()
                .move_to(17.811, 20.074)
                .line_to(15.6, 17.863)
                .vertical_line_to_relative(-3.291)
                .horizontal_line_to_relative(1.029)
                .vertical_line_to_relative(2.87)
                .line_to_relative(1.903, 1.903)
                .line_to(17.811, 20.074)
                .close()
                .move_to(17.143, 3.257)
                .horizontal_line_to_relative(-3.271)
                .curve_to(13.44, 2.064, 12.309, 1.2, 10.971, 1.2)
                .reflective_curve_to(8.503, 2.064, 8.071, 3.257)
                .horizontal_line_to(4.8)
                .curve_to_relative(-1.131, 0.0, -2.057, 0.926, -2.057, 2.057)
                .vertical_line_to_relative(15.429)
                .curve_to_relative(0.0, 1.131, 0.926, 2.057, 2.057, 2.057)
                .horizontal_line_to_relative(6.285)
                .curve_to_relative(-0.607, -0.586, -1.101, -1.286, -1.461, -2.057)
                .horizontal_line_to(4.8)
                .vertical_line_to(5.314)
                .horizontal_line_to_relative(2.057)
                .vertical_line_to(8.4)
                .horizontal_line_to_relative(8.229)
                .vertical_line_to(5.314)
                .horizontal_line_to_relative(2.057)
                .vertical_line_to_relative(5.225)
                .curve_to_relative(0.73, 0.103, 1.419, 0.319, 2.057, 0.617)
                .vertical_line_to(5.314)
                .curve_to(19.2, 4.183, 18.274, 3.257, 17.143, 3.257)
                .close()
                .move_to(10.971, 5.314)
                .curve_to_relative(-0.566, 0.0, -1.029, -0.463, -1.029, -1.029)
                .curve_to_relative(0.0, -0.566, 0.463, -1.029, 1.029, -1.029)
                .curve_to_relative(0.566, 0.0, 1.029, 0.463, 1.029, 1.029)
                .curve_to(12.0, 4.851, 11.537, 5.314, 10.971, 5.314)
                .close()
        })
        .build()
});

/// Icon for Insulin Plugin.
pub static IC_PLUGIN_INSULIN: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginInsulin", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Insulin Plugin.")
        .path(PathStyle::new().fill(Color::WHITE), |p| {
            p.move_to(10.685, 18.578)
                .vertical_line_to(9.348)
                .horizontal_line_to_relative(7.152)
                .vertical_line_to(8.085)
                .curve_to_relative(0.0, -1.215, -1.219, -1.945, -2.713, -2.2)
                .line_to_relative(-1.061, -1.061)
                .vertical_line_to(3.385)
                .horizontal_line_to_relative(0.784)
                .curve_to_relative(0.276, 0.0, 0.5, -0.224, 0.5, -0.5)
                .vertical_line_to(1.7)
                .curve_to_relative(0.0, -0.276, -0.224, -0.5, -0.5, -0.5)
                .horizontal_line_to(9.153)
                .curve_to_relative(-0.276, 0.0, -0.5, 0.224, -0.5, 0.5)
                .vertical_line_to_relative(1.185)
                .curve_to_relative(0.0, 0.276, 0.224, 0.5, 0.5, 0.5)
                .horizontal_line_to_relative(0.784)
                .vertical_line_to_relative(1.439)
                .line_to(8.876, 5.885)
                .curve_to_relative(-1.493, 0.255, -2.713, 0.985, -2.713, 2.2)
                .vertical_line_to(20.6)
                .curve_to_relative(0.0, 1.215, 0.985, 2.2, 2.2, 2.2)
                .horizontal_line_to_relative(7.273)
                .curve_to_relative(1.215, 0.0, 2.2, -0.985, 2.2, -2.2)
                .vertical_line_to_relative(-2.022)
                .horizontal_line_to(10.685)
                .close()
        })
        .build()
});

/// Icon for Objectives Plugin.
pub static IC_PLUGIN_OBJECTIVES: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginObjectives", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Objectives Plugin.")
        .path(PathStyle::new().fill(Color::WHITE), |p| {
            p.move_to(22.204, 8.531)
                .line_to(12.79, 5.638)
                .curve_to_relative(-0.513, -0.158, -1.067, -0.158, -1.579, 0.0)
                .line_to(1.796, 8.531)
                .curve_to_relative(-0.794, 0.244, -0.794, 1.295, 0.0, 1.539)
                .line_to_relative(1.641, 0.504)
                .curve_to_relative(-0.36, 0.445, -0.582, 0.988, -0.603, 1.583)
                .curve_to(2.509, 12.343, 2.28, 12.679, 2.28, 13.08)
                .curve_to_relative(0.0, 0.364, 0.192, 0.67, 0.468, 0.866)
                .line_to_relative(-0.862, 3.877)
                .curve_to(1.811, 18.16, 2.068, 18.48, 2.413, 18.48)
                .horizontal_line_to_relative(1.894)
                .curve_to_relative(0.346, 0.0, 0.602, -0.32, 0.527, -0.657)
                .line_to_relative(-0.862, -3.877)
                .curve_to(4.248, 13.75, 4.44, 13.444, 4.44, 13.08)
                .curve_to_relative(0.0, -0.39, -0.218, -0.717, -0.529, -0.907)
                .curve_to_relative(0.026, -0.507, 0.285, -0.955, 0.698, -1.239)
                .line_to_relative(6.601, 2.028)
                .curve_to_relative(0.306, 0.094, 0.892, 0.211, 1.579, 0.0)
                .line_to_relative(9.415, -2.892)
                .curve_to(22.999, 9.825, 22.999, 8.775, 22.204, 8.531)
                .line_to(22.204, 8.531)
                .close()
                .move_to(13.107, 13.994)
                .curve_to_relative(-0.963, 0.296, -1.783, 0.132, -2.214, 0.0)
                .line_to_relative(-4.894, -1.504)
                .line_to(5.52, 16.32)
                .curve_to_relative(0.0, 1.193, 2.901, 2.16, 6.48, 2.16)
                .reflective_curve_to_relative(6.48, -0.967, 6.48, -2.16)
                .line_to_relative(-0.479, -3.83)
                .line_to(13.107, 13.994)
                .close()
        })
        .build()
});

/// Icon for OpenAPS Plugin.
pub static IC_PLUGIN_OPEN_APS: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginOpenAPS", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for OpenAPS Plugin.")
        .path(PathStyle::new().fill(Color::WHITE), |p| {
            p.move_to(13.128, 1.261)
                .curve_to_relative(-0.75, -0.081, -1.507, -0.081, -2.257, 0.0)
                .line_to(10.571, 3.39)
                .curve_to_relative(-0.684, 0.116, -1.352, 0.316, -1.99, 0.595)
                .line_to(7.197, 2.359)
                .curve_to(6.523, 2.703, 5.887, 3.119, 5.298, 3.6)
                .line_to_relative(0.878, 1.956)
                .curve_to_relative(-0.514, 0.475, -0.97, 1.01, -1.358, 1.595)
                .line_to(2.79, 6.546)
                .curve_to(2.407, 7.206, 2.092, 7.907, 1.853, 8.635)
                .line_to_relative(1.778, 1.162)
                .curve_to_relative(-0.18, 0.682, -0.28, 1.383, -0.295, 2.089)
                .line_to_relative(-2.028, 0.605)
                .curve_to_relative(0.028, 0.767, 0.136, 1.529, 0.321, 2.273)
                .horizontal_line_to_relative(2.113)
                .curve_to_relative(0.211, 0.673, 0.5, 1.317, 0.862, 1.92)
                .line_to(3.22, 18.31)
                .curve_to_relative(0.431, 0.63, 0.927, 1.212, 1.478, 1.736)
                .line_to_relative(1.778, -1.163)
                .curve_to_relative(0.535, 0.45, 1.12, 0.833, 1.745, 1.141)
                .line_to(7.92, 22.153)
                .curve_to_relative(0.697, 0.293, 1.423, 0.51, 2.166, 0.647)
                .line_to_relative(0.878, -1.956)
                .curve_to_relative(0.689, 0.084, 1.385, 0.084, 2.074, 0.0)
                .line_to_relative(0.878, 1.956)
                .curve_to_relative(0.742, -0.138, 1.468, -0.354, 2.166, -0.647)
                .line_to_relative(-0.301, -2.128)
                .curve_to_relative(0.625, -0.308, 1.21, -0.691, 1.745, -1.141)
                .line_to_relative(1.778, 1.163)
                .curve_to_relative(0.551, -0.524, 1.047, -1.106, 1.478, -1.736)
                .line_to_relative(-1.384, -1.625)
                .curve_to_relative(0.362, -0.602, 0.651, -1.247, 0.862, -1.92)
                .horizontal_line_to_relative(2.113)
                .curve_to_relative(0.186, -0.744, 0.293, -1.506, 0.321, -2.273)
                .line_to_relative(-2.028, -0.605)
                .curve_to_relative(-0.016, -0.706, -0.115, -1.408, -0.295, -2.089)
                .line_to_relative(1.778, -1.162)
                .curve_to_relative(-0.239, -0.728, -0.554, -1.428, -0.938, -2.089)
                .line_to_relative(-2.028, 0.606)
                .curve_to_relative(-0.388, -0.585, -0.844, -1.121, -1.358, -1.595)
                .line_to(18.702, 3.6)
                .curve_to_relative(-0.588, -0.481, -1.224, -0.897, -1.898, -1.242)
                .line_to_relative(-1.384, 1.625)
                .curve_to_relative(-0.638, -0.279, -1.306, -0.478, -1.99, -0.595)
                .line_to(13.128, 1.261)
                .close()
                .move_to(12.0, 6.971)
                .curve_to_relative(2.776, 0.0, 5.029, 2.293, 5.029, 5.117)
                .curve_to_relative(0.0, 2.824, -2.253, 5.117, -5.029, 5.117)
                .reflective_curve_to_relative(-5.029, -2.293, -5.029, -5.117)
                .curve_to(6.971, 9.264, 9.224, 6.971, 12.0, 6.971)
                .close()
        })
        .build()
});

/// Icon for Overview Plugin.
pub static IC_PLUGIN_OVERVIEW: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginOverview", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Overview Plugin.")
        .path(PathStyle::new().fill(Color::WHITE), |p| {
            p.move_to(9.84, 21.18)
                .vertical_line_to(14.7)
                .horizontal_line_to_relative(4.32)
                .vertical_line_to_relative(6.48)
                .horizontal_line_to_relative(5.4)
                .vertical_line_to_relative(-8.64)
                .horizontal_line_to_relative(3.24)
                .line_to(12.0, 2.82)
                .line_to(1.2, 12.54)
                .horizontal_line_to_relative(3.24)
                .vertical_line_to_relative(8.64)
                .horizontal_line_to(9.84)
                .close()
        })
        .build()
});

/// Icon for Random BG Plugin.
pub static IC_PLUGIN_RANDOM_BG: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginRandomBg", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Random BG Plugin.")
        .path(PathStyle::new().fill(Color::WHITE), |p| {
            p.move_to(21.18, 9.84)
                .horizontal_line_to_relative(-4.007)
                .curve_to_relative(0.428, 0.999, 0.24, 2.201, -0.574, 3.015)
                .line_to(12.0, 17.453)
                .vertical_line_to_relative(1.567)
                .curve_to_relative(0.0, 0.895, 0.725, 1.62, 1.62, 1.62)
                .horizontal_line_to_relative(7.56)
                .curve_to_relative(0.895, 0.0, 1.62, -0.725, 1.62, -1.62)
                .vertical_line_to_relative(-7.56)
                .curve_to(22.8, 10.565, 22.075, 9.84, 21.18, 9.84)
                .close()
                .move_to(17.4, 16.05)
                .curve_to_relative(-0.447, 0.0, -0.81, -0.363, -0.81, -0.81)
                .curve_to_relative(0.0, -0.448, 0.363, -0.81, 0.81, -0.81)
                .reflective_curve_to_relative(0.81, 0.362, 0.81, 0.81)
                .curve_to(18.21, 15.687, 17.847, 16.05, 17.4, 16.05)
                .close()
                .move_to(15.835, 9.749)
                .line_to(9.931, 3.845)
                .curve_to_relative(-0.647, -0.647, -1.695, -0.647, -2.342, 0.0)
                .line_to(1.685, 9.749)
                .curve_to_relative(-0.647, 0.647, -0.647, 1.695, 0.0, 2.342)
                .line_to_relative(5.904, 5.904)
                .curve_to_relative(0.647, 0.647, 1.695, 0.647, 2.342, 0.0)
                .line_to_relative(5.904, -5.904)
                .curve_to(16.482, 11.444, 16.482, 10.396, 15.835, 9.749)
                .line_to(15.835, 9.749)
                .close()
                .move_to(4.44, 11.73)
                .curve_to_relative(-0.447, 0.0, -0.81, -0.363, -0.81, -0.81)
                .curve_to_relative(0.0, -0.448, 0.363, -0.81, 0.81, -0.81)
                .reflective_curve_to_relative(0.81, 0.362, 0.81, 0.81)
                .curve_to(5.25, 11.367, 4.887, 11.73, 4.44, 11.73)
                .close()
                .move_to(8.76, 16.05)
                .curve_to_relative(-0.447, 0.0, -0.81, -0.363, -0.81, -0.81)
                .curve_to_relative(0.0, -0.448, 0.363, -0.81, 0.81, -0.81)
                .reflective_curve_to_relative(0.81, 0.362, 0.81, 0.81)
                .curve_to(9.57, 15.687, 9.207, 16.05, 8.76, 16.05)
                .close()
                .move_to(8.76, 11.73)
                .curve_to_relative(-0.447, 0.0, -0.81, -0.363, -0.81, -0.81)
                .curve_to_relative(0.0, -0.448, 0.363, -0.81, 0.81, -0.81)
                .reflective_curve_to_relative(0.81, 0.362, 0.81, 0.81)
                .curve_to(9.57, 11.367, 9.207, 11.73, 8.76, 11.73)
                .close()
                .move_to(8.76, 7.41)
                .curve_to_relative(-0.447, 0.0, -0.81, -0.363, -0.81, -0.81)
                .curve_to_relative(0.0, -0.448, 0.363, -0.81, 0.81, -0.81)
                .reflective_curve_to_relative(0.81, 0.362, 0.81, 0.81)
                .curve_to(9.57, 7.047, 9.207, 7.41, 8.76, 7.41)
                .close()
                .move_to(13.08, 11.73)
                .curve_to_relative(-0.447, 0.0, -0.81, -0.363, -0.81, -0.81)
                .curve_to_relative(0.0, -0.448, 0.363, -0.81, 0.81, -0.81)
                .reflective_curve_to_relative(0.81, 0.362, 0.81, 0.81)
                .curve_to(13.89, 11.367, 13.527, 11.73, 13.08, 11.73)
                .close()
        })
        .build()
});

/// Icon for Virtual Pump Plugin.
pub static IC_PLUGIN_VIRTUAL_PUMP: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginVirtualPump", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Virtual Pump Plugin.")
        .path(PathStyle::new().fill(Color::WHITE), |p| {
            p.move_to(15.277, 19.68)
                .curve_to_relative(0.0, 1.668, -2.88, 3.055, -6.471, 3.118)
                .curve_to_relative(-3.591, 0.064, -6.689, -1.219, -6.96, -2.883)
                .curve_to_relative(-0.271, -1.662, 2.376, -3.147, 5.945, -3.335)
                .curve_to_relative(3.571, -0.189, 6.868, 0.982, 7.409, 2.631)
                .line_to(15.277, 19.68)
                .close()
                .move_to(12.582, 12.572)
                .curve_to_relative(0.0, 1.978, -1.638, 3.624, -3.679, 3.698)
                .curve_to(6.86, 16.345, 5.1, 14.823, 4.945, 12.852)
                .curve_to_relative(-0.155, -1.972, 1.351, -3.733, 3.38, -3.956)
                .curve_to_relative(2.031, -0.224, 3.906, 1.165, 4.213, 3.12)
                .line_to(12.582, 12.572)
                .close()
                .move_to(17.75, 5.842)
                .curve_to_relative(-0.156, 0.0, -0.283, 0.14, -0.283, 0.312)
                .vertical_line_to_relative(0.013)
                .curve_to_relative(0.0, 0.165, 0.127, 0.3, 0.283, 0.3)
                .curve_to_relative(0.156, 0.0, 0.283, -0.134, 0.283, -0.3)
                .curve_to_relative(0.0, -0.002, 0.0, -0.004, 0.0, -0.006)
                .curve_to_relative(0.0, -0.002, 0.0, -0.005, 0.0, -0.007)
                .curve_to(18.033, 5.982, 17.906, 5.842, 17.75, 5.842)
                .close()
                .move_to(16.808, 6.441)
                .vertical_line_to(5.868)
                .line_to(16.278, 6.154)
                .close()
                .move_to(18.848, 6.442)
                .line_to(19.378, 6.155)
                .line_to(18.848, 5.868)
                .close()
                .move_to(17.476, 1.2)
                .curve_to_relative(-2.593, 0.0, -4.697, 1.732, -4.697, 3.864)
                .curve_to_relative(0.0, 1.056, 0.525, 2.065, 1.452, 2.794)
                .line_to_relative(-1.452, 3.002)
                .line_to_relative(2.81, -2.258)
                .curve_to_relative(0.595, 0.215, 1.238, 0.326, 1.887, 0.326)
                .curve_to_relative(2.593, 0.0, 4.697, -1.732, 4.697, -3.864)
                .curve_to(22.173, 2.932, 20.068, 1.2, 17.476, 1.2)
                .close()
                .move_to(20.35, 6.158)
                .curve_to_relative(0.0, 0.383, -0.288, 0.695, -0.642, 0.695)
                .line_to_relative(-3.76, -0.001)
                .curve_to_relative(-0.024, 0.0, -0.048, -0.001, -0.072, -0.004)
                .curve_to_relative(-0.018, 0.003, -0.037, 0.004, -0.056, 0.004)
                .horizontal_line_to_relative(-0.876)
                .curve_to_relative(-0.012, 0.0, -0.023, -0.001, -0.034, -0.002)
                .vertical_line_to_relative(0.002)
                .curve_to_relative(0.0, 0.059, -0.048, 0.106, -0.107, 0.106)
                .horizontal_line_to_relative(-0.114)
                .curve_to_relative(-0.059, 0.0, -0.106, -0.048, -0.106, -0.106)
                .line_to_relative(0.0, -1.436)
                .curve_to_relative(0.0, -0.059, 0.048, -0.106, 0.106, -0.106)
                .horizontal_line_to_relative(0.114)
                .curve_to_relative(0.056, 0.0, 0.102, 0.043, 0.106, 0.098)
                .curve_to_relative(0.011, -0.001, 0.023, -0.002, 0.035, -0.002)
                .horizontal_line_to_relative(0.362)
                .line_to_relative(0.0, -1.861)
                .curve_to_relative(0.0, -0.383, 0.288, -0.695, 0.642, -0.695)
                .line_to_relative(3.76, 0.001)
                .curve_to_relative(0.354, 0.0, 0.642, 0.311, 0.641, 0.695)
                .line_to(20.35, 6.158)
                .close()
                .move_to(16.278, 3.687)
                .horizontal_line_to_relative(3.1)
                .vertical_line_to_relative(1.839)
                .horizontal_line_to_relative(-3.1)
                .vertical_line_to(3.687)
                .close()
        })
        .build()
});

/// Icon for Wear Plugin.
pub static IC_PLUGIN_WEAR: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPluginWear", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Wear Plugin.")
        .path(PathStyle::new().fill(Color::WHITE), |p| {
            p.move_to(19.2, 12.0)
                .curve_to_relative(0.0, -2.286, -1.071, -4.329, -2.736, -5.643)
                .line_to(15.6, 1.2)
                .horizontal_line_to(8.4)
                .line_to(7.545, 6.357)
                .curve_to(5.871, 7.671, 4.8, 9.705, 4.8, 12.0)
                .reflective_curve_to_relative(1.071, 4.329, 2.745, 5.643)
                .line_to(8.4, 22.8)
                .horizontal_line_to_relative(7.2)
                .line_to_relative(0.864, -5.157)
                .curve_to(18.129, 16.329, 19.2, 14.286, 19.2, 12.0)
                .close()
                .move_to(6.6, 12.0)
                .curve_to_relative(0.0, -2.979, 2.421, -5.4, 5.4, -5.4)
                .reflective_curve_to_relative(5.4, 2.421, 5.4, 5.4)
                .reflective_curve_to_relative(-2.421, 5.4, -5.4, 5.4)
                .reflective_curve_to(6.6, 14.979, 6.6, 12.0)
                .close()
        })
        .build()
});

/// Icon for Profile.
pub static IC_PROFILE: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcProfile", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Profile.")
        .path(PathStyle::new().fill(Color::WHITE), |p| {
            p.move_to(22.721, 9.405)
                .curve_to_relative(-0.186, -0.577, -0.684, -0.997, -1.285, -1.083)
                .line_to_relative(-5.534, -0.805)
                .line_to_relative(-2.476, -5.015)
                .curve_to_relative(-0.535, -1.088, -2.318, -1.088, -2.853, 0.0)
                .line_to(8.097, 7.516)
                .line_to(2.562, 8.321)
                .curve_to(1.964, 8.408, 1.465, 8.828, 1.278, 9.405)
                .curve_to_relative(-0.188, 0.576, -0.032, 1.208, 0.402, 1.631)
                .line_to_relative(4.006, 3.903)
                .line_to_relative(-0.945, 5.514)
                .curve_to_relative(-0.103, 0.599, 0.143, 1.202, 0.633, 1.557)
                .curve_to_relative(0.277, 0.202, 0.605, 0.305, 0.935, 0.305)
                .curve_to_relative(0.253, 0.0, 0.508, -0.061, 0.74, -0.184)
                .line_to(12.0, 19.529)
                .line_to_relative(4.951, 2.601)
                .curve_to_relative(0.54, 0.281, 1.184, 0.239, 1.678, -0.121)
                .curve_to_relative(0.489, -0.355, 0.735, -0.961, 0.632, -1.557)
                .line_to_relative(-0.945, -5.514)
                .line_to_relative(4.005, -3.903)
                .curve_to(22.752, 10.613, 22.91, 9.981, 22.721, 9.405)
                .close()
                .move_to(21.261, 10.181)
                .line_to_relative(-4.376, 4.266)
                .line_to_relative(1.033, 6.023)
                .curve_to_relative(0.02, 0.121, -0.029, 0.241, -0.127, 0.311)
                .curve_to_relative(-0.055, 0.042, -0.121, 0.061, -0.186, 0.061)
                .curve_to_relative(-0.05, 0.0, -0.101, -0.011, -0.149, -0.037)
                .line_to_relative(-5.409, -2.842)
                .line_to_relative(-5.41, 2.842)
                .curve_to_relative(-0.104, 0.061, -0.235, 0.05, -0.336, -0.024)
                .curve_to_relative(-0.098, -0.07, -0.147, -0.191, -0.126, -0.311)
                .line_to_relative(1.033, -6.023)
                .line_to_relative(-4.378, -4.266)
                .curve_to_relative(-0.087, -0.084, -0.117, -0.212, -0.08, -0.327)
                .curve_to_relative(0.037, -0.115, 0.137, -0.198, 0.257, -0.216)
                .line_to(9.057, 8.76)
                .line_to_relative(2.705, -5.481)
                .curve_to_relative(0.107, -0.219, 0.463, -0.219, 0.57, 0.0)
                .line_to_relative(2.704, 5.481)
                .line_to_relative(6.049, 0.878)
                .curve_to_relative(0.121, 0.018, 0.219, 0.101, 0.257, 0.216)
                .curve_to(21.379, 9.97, 21.349, 10.097, 21.261, 10.181)
                .close()
        })
        .build()
});

/// Icon for Pump Battery.
pub static IC_PUMP_BATTERY: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPumpBattery", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Pump Battery.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF36FF00)), |p| {
            p.move_to(22.025, 10.135)
                .curve_to_relative(-0.428, 0.0, -0.775, 0.347, -0.775, 0.775)
                .vertical_line_to_relative(0.351)
                .horizontal_line_to_relative(-0.554)
                .vertical_line_to(8.492)
                .curve_to_relative(0.0, -1.028, -0.837, -1.865, -1.865, -1.865)
                .horizontal_line_to(3.065)
                .curve_to(2.037, 6.628, 1.2, 7.464, 1.2, 8.492)
                .vertical_line_to_relative(7.015)
                .curve_to_relative(0.0, 1.028, 0.837, 1.865, 1.865, 1.865)
                .horizontal_line_to_relative(15.766)
                .curve_to_relative(0.851, 0.0, 1.563, -0.577, 1.786, -1.357)
                .curve_to_relative(0.012, 0.001, 0.021, 0.007, 0.033, 0.007)
                .curve_to_relative(0.393, 0.0, 0.711, -0.351, 0.711, -0.785)
                .curve_to_relative(0.0, -0.415, -0.295, -0.747, -0.665, -0.774)
                .vertical_line_to_relative(-1.725)
                .horizontal_line_to_relative(0.554)
                .vertical_line_to_relative(0.351)
                .curve_to_relative(0.0, 0.428, 0.347, 0.775, 0.775, 0.775)
                .curve_to_relative(0.428, 0.0, 0.775, -0.347, 0.775, -0.775)
                .vertical_line_to_relative(-2.178)
                .curve_to(22.8, 10.483, 22.453, 10.135, 22.025, 10.135)
                .close()
                .move_to(19.514, 15.508)
                .curve_to_relative(0.0, 0.376, -0.307, 0.683, -0.683, 0.683)
                .horizontal_line_to(3.065)
                .curve_to_relative(-0.377, 0.0, -0.683, -0.307, -0.683, -0.683)
                .vertical_line_to(8.492)
                .curve_to_relative(0.0, -0.377, 0.306, -0.683, 0.683, -0.683)
                .horizontal_line_to_relative(15.766)
                .curve_to_relative(0.376, 0.0, 0.683, 0.306, 0.683, 0.683)
                .vertical_line_to(15.508)
                .close()
                .move_to(9.582, 9.96)
                .line_to(4.929, 13.412)
                .line_to(9.009, 11.972)
                .line_to(11.114, 14.058)
                .line_to(16.357, 9.942)
                .line_to(11.28, 11.935)
                .close()
        })
        .build()
});

/// Icon for Pump Cartridge.
pub static IC_PUMP_CARTRIDGE: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcPumpCartridge", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Pump Cartridge.")
        .path(PathStyle::new().fill(Color::from_argb(0xFFFEAF05)), |p| {
            p.move_to(22.366, 7.797)
                .curve_to_relative(-0.398, 0.228, -0.892, 0.114, -1.104, -0.254)
                .line_to_relative(-1.387, -2.42)
                .curve_to_relative(-0.211, -0.369, -0.06, -0.853, 0.338, -1.081)
                .line_to_relative(0.0, 0.0)
                .curve_to_relative(0.398, -0.228, 0.892, -0.114, 1.104, 0.254)
                .line_to_relative(1.387, 2.42)
                .curve_to(22.916, 7.085, 22.765, 7.569, 22.366, 7.797)
                .line_to(22.366, 7.797)
                .close()
                .move_to(7.132, 18.698)
                .line_to_relative(-0.228, -0.396)
                .line_to_relative(14.352, -8.226)
                .curve_to_relative(0.132, -0.076, 0.219, -0.209, 0.235, -0.358)
                .line_to_relative(0.21, -3.573)
                .line_to_relative(-0.397, -0.693)
                .line_to_relative(-3.189, -1.624)
                .curve_to_relative(-0.136, -0.062, -0.295, -0.054, -0.427, 0.022)
                .line_to(3.336, 12.077)
                .line_to(3.108, 11.68)
                .curve_to_relative(-0.274, -0.477, -0.893, -0.636, -1.385, -0.354)
                .curve_to_relative(-0.492, 0.282, -0.668, 0.896, -0.394, 1.374)
                .line_to_relative(4.024, 7.018)
                .curve_to_relative(0.274, 0.477, 0.893, 0.636, 1.385, 0.354)
                .curve_to(7.406, 19.176, 7.406, 19.176, 7.132, 18.698)
                .close()
                .move_to(19.703, 9.922)
                .line_to(18.052, 7.33)
                .curve_to_relative(-0.08, -0.127, -0.252, -0.162, -0.382, -0.079)
                .curve_to_relative(-0.127, 0.08, -0.169, 0.242, -0.097, 0.367)
                .curve_to_relative(0.002, 0.003, 0.004, 0.008, 0.006, 0.011)
                .line_to_relative(1.638, 2.571)
                .line_to_relative(-1.102, 0.632)
                .line_to(16.464, 8.24)
                .curve_to_relative(-0.081, -0.126, -0.252, -0.162, -0.382, -0.079)
                .curve_to_relative(-0.127, 0.08, -0.169, 0.242, -0.097, 0.367)
                .curve_to_relative(0.002, 0.003, 0.004, 0.008, 0.006, 0.011)
                .line_to_relative(1.638, 2.571)
                .line_to_relative(-1.102, 0.632)
                .line_to(14.876, 9.15)
                .curve_to_relative(-0.081, -0.126, -0.252, -0.162, -0.382, -0.079)
                .curve_to_relative(-0.127, 0.08, -0.169, 0.242, -0.097, 0.368)
                .curve_to_relative(0.002, 0.003, 0.004, 0.008, 0.006, 0.011)
                .line_to_relative(1.638, 2.571)
                .line_to_relative(-0.959, 0.55)
                .line_to_relative(-2.273, -3.636)
                .curve_to_relative(-0.078, -0.124, -0.242, -0.163, -0.373, -0.088)
                .line_to_relative(-8.244, 4.725)
                .line_to_relative(-0.406, -0.708)
                .line_to_relative(14.141, -8.105)
                .line_to_relative(2.837, 1.464)
                .line_to_relative(-0.17, 3.189)
                .line_to(19.703, 9.922)
                .close()
        })
        .build()
});

/// Icon for Question mark.
pub static IC_QUESTION: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcQuestion", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Question mark.")
        .path(PathStyle::new().fill(Color::from_argb(0xFFFEAF05)), |p| {
            p.move_to(12.062, 17.861)
                .curve_to_relative(-0.58, 0.0, -1.05, -0.47, -1.05, -1.051)
                .curve_to_relative(0.0, -3.776, 1.76, -5.094, 3.175, -6.153)
                .curve_to_relative(1.185, -0.888, 2.042, -1.529, 2.042, -3.605)
                .curve_to_relative(0.0, -2.862, -2.749, -3.752, -3.75, -3.752)
                .curve_to_relative(-2.157, 0.0, -3.9, 1.293, -4.78, 3.547)
                .curve_to(7.487, 7.388, 6.876, 7.656, 6.338, 7.444)
                .curve_to_relative(-0.541, -0.211, -0.807, -0.82, -0.596, -1.361)
                .curve_to(6.936, 3.025, 9.454, 1.2, 12.479, 1.2)
                .curve_to_relative(2.359, 0.0, 5.852, 1.86, 5.852, 5.852)
                .curve_to_relative(0.0, 3.127, -1.599, 4.324, -2.885, 5.286)
                .curve_to_relative(-1.304, 0.976, -2.333, 1.746, -2.333, 4.472)
                .curve_to(13.113, 17.39, 12.642, 17.861, 12.062, 17.861)
                .close()
                .move_to(13.575, 21.349)
                .curve_to_relative(0.0, 0.801, -0.65, 1.451, -1.451, 1.451)
                .curve_to_relative(-0.801, 0.0, -1.451, -0.65, -1.451, -1.451)
                .curve_to_relative(0.0, -0.801, 0.65, -1.451, 1.451, -1.451)
                .curve_to(12.925, 19.898, 13.575, 20.548, 13.575, 21.349)
                .close()
        })
        .build()
});

/// Icon for Quick Wizard.
pub static IC_QUICKWIZARD: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcQuickwizard", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Quick Wizard.")
        .path(PathStyle::new().fill(Color::TRANSPARENT), |p| {
            p.move_to(0.0, 0.0)
                .horizontal_line_to(24.0)
                .vertical_line_to(24.0)
                .horizontal_line_to(0.0)
                .close()
        })
        .path(PathStyle::new().fill(Color::from_argb(0xFFFEAF05)), |p| {
            p.move_to(10.874, 5.812)
                .curve_to(10.251, 6.578, 9.99, 6.985, 9.486, 7.806)
                .curve_to_relative(-2.794, 0.264, -4.365, 3.054, -3.751, 5.177)
                .curve_to_relative(0.27, 0.935, 0.864, 1.638, 1.663, 2.174)
                .curve_to_relative(2.606, 1.746, 6.93, 1.586, 9.421, -0.339)
                .curve_to_relative(1.318, -1.019, 1.912, -2.313, 1.481, -3.969)
                .curve_to_relative(-0.457, -1.754, -1.604, -2.869, -3.373, -3.185)
                .curve_to_relative(-1.235, -0.221, -2.19, 0.411, -2.839, 1.457)
                .curve_to_relative(-0.548, 0.884, -0.799, 1.794, -1.808, 2.603)
                .curve_to_relative(-0.432, -0.478, -0.508, -1.067, -0.536, -1.644)
                .curve_to_relative(-0.133, -2.76, 2.242, -4.927, 5.1, -4.676)
                .curve_to_relative(2.626, 0.23, 4.957, 2.171, 5.676, 4.724)
                .curve_to_relative(0.679, 2.411, -0.251, 4.919, -2.431, 6.559)
                .curve_to_relative(-3.325, 2.501, -8.764, 2.583, -12.147, 0.183)
                .curve_to_relative(-2.284, -1.62, -3.197, -4.308, -2.33, -6.86)
                .curve_to(4.515, 7.352, 7.118, 5.494, 9.784, 5.6)
                .curve_to(10.119, 5.614, 10.445, 5.666, 10.874, 5.812)
                .close()
                .move_to(6.866, 13.378)
                .curve_to_relative(0.584, -0.114, 1.308, -0.244, 1.848, -0.357)
                .curve_to_relative(1.689, -0.354, 2.914, -1.365, 3.633, -2.973)
                .curve_to_relative(0.321, -0.718, 0.779, -1.249, 1.608, -1.576)
                .curve_to_relative(0.464, 0.901, 0.504, 1.821, 0.248, 2.767)
                .curve_to_relative(-0.315, 1.164, -0.987, 2.068, -2.019, 2.697)
                .curve_to_relative(-0.684, 0.417, -1.425, 0.708, -2.182, 0.963)
                .curve_to(8.723, 15.328, 7.594, 14.895, 6.866, 13.378)
                .close()
                .move_to(12.607, 14.262)
                .curve_to_relative(0.815, -0.596, 1.388, -1.209, 1.63, -1.789)
                .curve_to_relative(0.992, 0.176, 2.132, 0.348, 3.112, 0.522)
                .curve_to(16.74, 14.924, 14.393, 15.372, 12.607, 14.262)
                .close()
                .move_to(1.578, 13.906)
                .curve_to_relative(0.199, -0.137, 0.839, -0.21, 1.323, -0.136)
                .curve_to_relative(0.288, 0.701, 0.652, 1.36, 1.23, 2.134)
                .curve_to_relative(-0.635, 0.129, -1.152, 0.281, -1.74, 0.249)
                .curve_to_relative(-0.547, -0.03, -1.102, -0.391, -1.179, -1.097)
                .curve_to(1.174, 14.715, 1.211, 14.158, 1.578, 13.906)
                .close()
                .move_to(20.189, 15.392)
                .curve_to_relative(0.218, -0.552, 0.402, -1.067, 0.622, -1.566)
                .curve_to_relative(0.261, -0.59, 0.687, -0.844, 1.244, -0.756)
                .curve_to_relative(0.465, 0.074, 0.639, 0.417, 0.715, 0.839)
                .curve_to_relative(0.109, 0.6, -0.086, 1.098, -0.587, 1.347)
                .curve_to(21.562, 15.565, 20.904, 15.472, 20.189, 15.392)
                .close()
        })
        .build()
});

/// Icon for Site Rotation.
pub static IC_SITE_ROTATION: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcSiteRotation", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Site Rotation.")
        .path(PathStyle::new().fill(Color::TRANSPARENT), |p| {
            p.move_to(0.0, 0.0)
                .horizontal_line_to(24.0)
                .vertical_line_to(24.0)
                .horizontal_line_to(0.0)
                .close()
        })
        .path(PathStyle::new().fill(Color::from_argb(0xFF67DFE8)), |p| {
            p.move_to(8.128, 5.493)
                .line_to(7.22, 3.968)
                .curve_to(4.489, 5.6, 2.649, 8.576, 2.642, 11.981)
                .horizontal_line_to(1.2)
                .line_to_relative(2.33, 4.035)
                .line_to_relative(2.33, -4.035)
                .horizontal_line_to_relative(-1.44)
                .curve_to(4.426, 9.224, 5.916, 6.815, 8.128, 5.493)
                .close()
                .move_to(20.47, 7.978)
                .line_to_relative(-2.33, 4.035)
                .horizontal_line_to_relative(1.44)
                .curve_to_relative(-0.005, 2.759, -1.496, 5.171, -3.709, 6.493)
                .line_to_relative(0.908, 1.525)
                .curve_to_relative(2.733, -1.633, 4.573, -4.611, 4.578, -8.018)
                .horizontal_line_to(22.8)
                .line_to(20.47, 7.978)
                .close()
                .move_to(11.981, 19.581)
                .curve_to_relative(-2.757, -0.007, -5.166, -1.497, -6.488, -3.709)
                .line_to(3.968, 16.78)
                .curve_to_relative(1.632, 2.731, 4.608, 4.571, 8.013, 4.578)
                .vertical_line_to(22.8)
                .line_to_relative(4.035, -2.33)
                .line_to_relative(-4.035, -2.33)
                .vertical_line_to(19.581)
                .close()
        })
        .path(PathStyle::new().fill(Color::from_argb(0xFF66DEE7)), |p| {
            p.move_to(12.013, 2.642)
                .vertical_line_to(1.2)
                .line_to(7.978, 3.53)
                .line_to_relative(4.035, 2.33)
                .vertical_line_to_relative(-1.44)
                .curve_to_relative(2.76, 0.005, 5.171, 1.496, 6.493, 3.709)
                .line_to_relative(1.525, -0.908)
                .curve_to(18.398, 4.487, 15.421, 2.647, 12.013, 2.642)
                .close()
        })
        .build()
});

/// Icon for Cancel TBR (Temporary Basal Rate).
pub static IC_TBR_CANCEL: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcTbrCancel", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Cancel TBR (Temporary Basal Rate).")
        .path(PathStyle::new().fill(Color::from_argb(0xFFCF8BFE)), |p| {
            p.move_to(1.948, 12.668)
                .curve_to_relative(-0.175, 0.0, -0.35, -0.067, -0.484, -0.2)
                .curve_to_relative(-0.267, -0.267, -0.267, -0.699, 0.001, -0.966)
                .line_to_relative(7.533, -7.534)
                .curve_to_relative(0.268, -0.267, 0.699, -0.267, 0.967, 0.001)
                .curve_to_relative(0.267, 0.267, 0.267, 0.699, -0.001, 0.967)
                .line_to_relative(-7.533, 7.533)
                .curve_to(2.297, 12.602, 2.123, 12.668, 1.948, 12.668)
                .close()
                .move_to(9.482, 12.668)
                .curve_to_relative(-0.175, 0.0, -0.35, -0.067, -0.484, -0.2)
                .line_to(1.465, 4.936)
                .curve_to_relative(-0.267, -0.267, -0.267, -0.7, -0.001, -0.967)
                .curve_to_relative(0.267, -0.268, 0.699, -0.267, 0.967, -0.001)
                .line_to_relative(7.533, 7.534)
                .curve_to_relative(0.267, 0.267, 0.267, 0.699, 0.001, 0.966)
                .curve_to(9.832, 12.602, 9.657, 12.668, 9.482, 12.668)
                .close()
                .move_to(19.151, 20.281)
                .line_to(19.151, 5.105)
                .line_to(14.068, 5.105)
                .line_to(14.068, 20.281)
                .line_to(1.2, 20.281)
                .line_to(1.2, 18.893)
                .line_to(12.681, 18.893)
                .line_to(12.681, 3.719)
                .line_to(20.539, 3.719)
                .line_to(20.539, 18.893)
                .line_to(22.8, 18.893)
                .line_to(22.8, 20.281)
                .close()
        })
        .build()
});

/// Icon for High TBR (Temporary Basal Rate).
pub static IC_TBR_HIGH: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcTbrHigh", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for High TBR (Temporary Basal Rate).")
        .path(PathStyle::new().fill(Color::from_argb(0xFFCF8BFE)), |p| {
            p.move_to(19.151, 20.281)
                .line_to(19.151, 5.105)
                .line_to(14.068, 5.105)
                .line_to(14.068, 20.281)
                .line_to(1.2, 20.281)
                .line_to(1.2, 18.893)
                .line_to(12.681, 18.893)
                .line_to(12.681, 3.719)
                .line_to(20.539, 3.719)
                .line_to(20.539, 18.893)
                .line_to(22.8, 18.893)
                .line_to(22.8, 20.281)
                .close()
        })
        .build()
});

/// Icon for TDD (Total Daily Dose).
pub static IC_TDD: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcTdd", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for TDD (Total Daily Dose).")
        .path(PathStyle::new().fill(Color::from_argb(0xFFFEAF05)), |p| {
            p.move_to(4.145, 22.8)
                .curve_to_relative(-0.805, 0.0, -1.458, -0.653, -1.458, -1.458)
                .vertical_line_to(11.96)
                .curve_to_relative(0.0, -0.805, 0.653, -1.458, 1.458, -1.458)
                .reflective_curve_to_relative(1.458, 0.653, 1.458, 1.458)
                .vertical_line_to_relative(9.382)
                .curve_to(5.602, 22.147, 4.949, 22.8, 4.145, 22.8)
                .close()
                .move_to(9.381, 22.8)
                .curve_to_relative(-0.805, 0.0, -1.458, -0.653, -1.458, -1.458)
                .vertical_line_to(7.051)
                .curve_to_relative(0.0, -0.805, 0.653, -1.458, 1.458, -1.458)
                .reflective_curve_to_relative(1.458, 0.653, 1.458, 1.458)
                .vertical_line_to_relative(14.291)
                .curve_to(10.839, 22.147, 10.186, 22.8, 9.381, 22.8)
                .close()
                .move_to(14.618, 22.8)
                .curve_to_relative(-0.805, 0.0, -1.458, -0.653, -1.458, -1.458)
                .vertical_line_to(8.979)
                .curve_to_relative(0.0, -0.805, 0.653, -1.458, 1.458, -1.458)
                .reflective_curve_to_relative(1.458, 0.653, 1.458, 1.458)
                .vertical_line_to_relative(12.363)
                .curve_to(16.076, 22.147, 15.423, 22.8, 14.618, 22.8)
                .close()
                .move_to(19.855, 22.8)
                .curve_to_relative(-0.805, 0.0, -1.458, -0.653, -1.458, -1.458)
                .vertical_line_to(2.658)
                .curve_to_relative(0.0, -0.805, 0.653, -1.458, 1.458, -1.458)
                .curve_to_relative(0.805, 0.0, 1.458, 0.653, 1.458, 1.458)
                .vertical_line_to_relative(18.684)
                .curve_to(21.313, 22.147, 20.66, 22.8, 19.855, 22.8)
                .close()
        })
        .build()
});

/// Icon for Activity Temp Target.
pub static IC_TT_ACTIVITY: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcTtActivity", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Activity Temp Target.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF67DFE8)), |p| {
            p.move_to(19.392, 17.722)
                .curve_to_relative(1.246, 0.0, 2.26, -1.068, 2.26, -2.382)
                .curve_to_relative(0.0, -1.314, -1.014, -2.382, -2.26, -2.382)
                .curve_to_relative(-1.246, 0.0, -2.26, 1.069, -2.26, 2.382)
                .curve_to(17.132, 16.654, 18.146, 17.722, 19.392, 17.722)
                .close()
                .move_to(19.392, 13.69)
                .curve_to_relative(0.863, 0.0, 1.567, 0.74, 1.567, 1.65)
                .curve_to_relative(0.0, 0.91, -0.703, 1.65, -1.567, 1.65)
                .curve_to_relative(-0.863, 0.0, -1.567, -0.74, -1.567, -1.65)
                .curve_to(17.826, 14.43, 18.529, 13.69, 19.392, 13.69)
                .close()
                .move_to(22.732, 20.5)
                .curve_to_relative(-0.032, -0.045, -0.781, -1.088, -1.886, -1.088)
                .curve_to_relative(-0.822, 0.0, -1.356, 0.539, -1.828, 1.015)
                .curve_to_relative(-0.418, 0.421, -0.779, 0.786, -1.284, 0.786)
                .horizontal_line_to_relative(-0.001)
                .curve_to_relative(-0.411, 0.0, -0.748, -0.253, -1.082, -0.563)
                .line_to_relative(1.744, -1.388)
                .line_to_relative(-4.768, -6.657)
                .line_to_relative(-4.601, 3.661)
                .curve_to_relative(-0.271, 0.253, -0.656, 0.911, -0.172, 1.587)
                .curve_to_relative(0.224, 0.313, 0.485, 0.406, 0.665, 0.429)
                .curve_to_relative(0.428, 0.055, 0.773, -0.228, 0.801, -0.251)
                .line_to_relative(2.889, -2.298)
                .line_to_relative(0.708, 0.988)
                .line_to_relative(-4.152, 3.302)
                .curve_to_relative(-0.389, -0.368, -0.828, -0.667, -1.367, -0.667)
                .horizontal_line_to(8.395)
                .curve_to_relative(-0.825, 0.0, -1.526, 0.67, -2.145, 1.262)
                .curve_to_relative(-0.369, 0.353, -0.788, 0.754, -1.019, 0.754)
                .curve_to_relative(-0.448, 0.0, -1.028, -0.677, -1.196, -0.915)
                .curve_to_relative(-0.114, -0.161, -0.331, -0.195, -0.486, -0.075)
                .curve_to_relative(-0.154, 0.12, -0.186, 0.349, -0.072, 0.511)
                .curve_to_relative(0.087, 0.124, 0.877, 1.21, 1.753, 1.21)
                .curve_to_relative(0.499, 0.0, 0.956, -0.437, 1.485, -0.943)
                .curve_to_relative(0.526, -0.502, 1.121, -1.073, 1.679, -1.073)
                .horizontal_line_to_relative(0.0)
                .curve_to_relative(0.491, 0.0, 0.92, 0.471, 1.375, 0.97)
                .curve_to_relative(0.505, 0.554, 1.028, 1.127, 1.737, 1.127)
                .curve_to_relative(0.677, 0.0, 1.25, -0.494, 1.803, -0.973)
                .curve_to_relative(0.517, -0.447, 1.052, -0.909, 1.615, -0.909)
                .curve_to_relative(0.336, 0.001, 0.651, 0.307, 1.016, 0.66)
                .curve_to_relative(0.474, 0.46, 1.011, 0.98, 1.791, 0.98)
                .horizontal_line_to_relative(0.001)
                .curve_to_relative(0.784, 0.0, 1.304, -0.525, 1.764, -0.988)
                .curve_to_relative(0.432, -0.436, 0.805, -0.812, 1.348, -0.812)
                .curve_to_relative(0.753, 0.0, 1.323, 0.786, 1.329, 0.795)
                .curve_to_relative(0.116, 0.162, 0.332, 0.192, 0.486, 0.073)
                .curve_to(22.813, 20.89, 22.846, 20.663, 22.732, 20.5)
                .close()
                .move_to(12.871, 20.647)
                .curve_to_relative(-0.48, 0.415, -0.934, 0.807, -1.363, 0.807)
                .curve_to_relative(-0.414, -0.001, -0.814, -0.439, -1.237, -0.903)
                .curve_to_relative(-0.002, -0.003, -0.005, -0.005, -0.007, -0.008)
                .line_to_relative(4.624, -3.678)
                .line_to_relative(-1.545, -2.156)
                .line_to(9.89, 17.456)
                .curve_to_relative(-0.023, 0.02, -0.169, 0.125, -0.289, 0.101)
                .curve_to_relative(-0.025, -0.003, -0.101, -0.013, -0.195, -0.143)
                .curve_to_relative(-0.204, -0.286, 0.011, -0.533, 0.058, -0.581)
                .line_to_relative(4.026, -3.202)
                .line_to_relative(3.931, 5.489)
                .line_to_relative(-1.299, 1.033)
                .curve_to_relative(-0.348, -0.315, -0.723, -0.58, -1.197, -0.58)
                .curve_to(14.115, 19.572, 13.455, 20.143, 12.871, 20.647)
                .close()
        })
        .path(PathStyle::new().fill(Color::from_argb(0xFF67E86A)), |p| {
            p.move_to(4.835, 9.393)
                .curve_to_relative(-0.004, 0.0, -0.007, 0.0, -0.011, 0.0)
                .curve_to(4.367, 9.385, 3.957, 8.841, 3.7, 7.901)
                .curve_to_relative(-0.187, -0.686, -0.357, -1.4, -0.521, -2.092)
                .curve_to(3.076, 5.376, 2.974, 4.943, 2.866, 4.514)
                .line_to(2.795, 4.225)
                .curve_to_relative(-0.243, -0.99, -0.494, -2.014, -1.148, -2.129)
                .curve_to(1.57, 2.083, 1.52, 2.009, 1.533, 1.932)
                .curve_to_relative(0.013, -0.077, 0.085, -0.126, 0.162, -0.115)
                .curve_to_relative(0.834, 0.147, 1.107, 1.262, 1.371, 2.34)
                .line_to_relative(0.071, 0.287)
                .curve_to_relative(0.108, 0.43, 0.211, 0.865, 0.314, 1.299)
                .curve_to(3.615, 6.433, 3.784, 7.145, 3.97, 7.826)
                .curve_to(4.181, 8.601, 4.519, 9.105, 4.83, 9.11)
                .curve_to_relative(0.002, 0.0, 0.004, 0.0, 0.005, 0.0)
                .curve_to_relative(0.291, 0.0, 0.595, -0.437, 0.834, -1.201)
                .curve_to_relative(0.123, -0.394, 0.229, -0.819, 0.332, -1.23)
                .line_to_relative(0.082, -0.325)
                .curve_to_relative(0.091, -0.357, 0.176, -0.719, 0.262, -1.081)
                .curve_to(6.52, 4.532, 6.701, 3.765, 6.922, 3.055)
                .curve_to_relative(0.245, -0.787, 0.611, -1.223, 1.029, -1.227)
                .curve_to_relative(0.002, 0.0, 0.004, 0.0, 0.005, 0.0)
                .curve_to_relative(0.42, 0.0, 0.795, 0.433, 1.054, 1.22)
                .curve_to(9.194, 3.602, 9.349, 4.2, 9.498, 4.778)
                .line_to_relative(0.116, 0.447)
                .curve_to_relative(0.097, 0.368, 0.189, 0.741, 0.283, 1.113)
                .curve_to_relative(0.158, 0.637, 0.322, 1.296, 0.506, 1.917)
                .curve_to_relative(0.151, 0.513, 0.407, 0.839, 0.669, 0.853)
                .curve_to_relative(0.234, 0.029, 0.479, -0.241, 0.665, -0.693)
                .curve_to_relative(0.179, -0.434, 0.342, -0.939, 0.5, -1.544)
                .curve_to_relative(0.219, -0.842, 0.427, -1.696, 0.634, -2.55)
                .curve_to_relative(0.096, -0.394, 0.191, -0.788, 0.288, -1.181)
                .curve_to_relative(0.185, -0.75, 0.534, -1.181, 1.066, -1.321)
                .curve_to_relative(0.073, -0.019, 0.15, 0.026, 0.17, 0.102)
                .curve_to_relative(0.019, 0.076, -0.026, 0.153, -0.101, 0.173)
                .curve_to_relative(-0.429, 0.112, -0.703, 0.466, -0.864, 1.115)
                .curve_to_relative(-0.097, 0.393, -0.193, 0.786, -0.288, 1.18)
                .curve_to_relative(-0.208, 0.855, -0.416, 1.711, -0.635, 2.555)
                .curve_to_relative(-0.161, 0.618, -0.329, 1.135, -0.513, 1.581)
                .curve_to_relative(-0.321, 0.779, -0.721, 0.879, -0.938, 0.867)
                .curve_to_relative(-0.388, -0.02, -0.733, -0.414, -0.922, -1.055)
                .curve_to(9.949, 7.709, 9.785, 7.047, 9.625, 6.407)
                .curve_to_relative(-0.092, -0.371, -0.184, -0.742, -0.281, -1.11)
                .line_to(9.228, 4.849)
                .curve_to(9.08, 4.276, 8.926, 3.683, 8.747, 3.138)
                .curve_to_relative(-0.213, -0.643, -0.508, -1.026, -0.79, -1.026)
                .curve_to_relative(-0.001, 0.0, -0.002, 0.0, -0.002, 0.0)
                .curve_to(7.675, 2.114, 7.389, 2.498, 7.189, 3.14)
                .curve_to_relative(-0.218, 0.701, -0.398, 1.463, -0.572, 2.2)
                .curve_to(6.531, 5.703, 6.444, 6.067, 6.354, 6.425)
                .line_to(6.273, 6.749)
                .curve_to(6.169, 7.164, 6.062, 7.593, 5.936, 7.995)
                .curve_to(5.575, 9.148, 5.14, 9.393, 4.835, 9.393)
                .close()
                .move_to(14.255, 6.082)
                .horizontal_line_to_relative(-3.139)
                .curve_to_relative(-0.258, 0.0, -0.466, -0.214, -0.466, -0.478)
                .vertical_line_to(3.7)
                .horizontal_line_to(5.281)
                .line_to_relative(0.0, 1.904)
                .curve_to_relative(0.0, 0.264, -0.209, 0.478, -0.466, 0.478)
                .horizontal_line_to(1.666)
                .curve_to(1.408, 6.082, 1.2, 5.868, 1.2, 5.604)
                .curve_to_relative(0.0, -0.264, 0.208, -0.478, 0.466, -0.478)
                .horizontal_line_to_relative(2.683)
                .line_to_relative(0.0, -1.904)
                .curve_to_relative(0.0, -0.264, 0.209, -0.478, 0.466, -0.478)
                .horizontal_line_to_relative(6.3)
                .curve_to_relative(0.258, 0.0, 0.466, 0.214, 0.466, 0.478)
                .vertical_line_to_relative(1.904)
                .horizontal_line_to_relative(2.673)
                .curve_to_relative(0.258, 0.0, 0.466, 0.214, 0.466, 0.478)
                .curve_to(14.721, 5.868, 14.512, 6.082, 14.255, 6.082)
                .close()
        })
        .build()
});

/// Icon for Cancel Temp Target.
pub static IC_TT_CANCEL: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcTtCancel", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Cancel Temp Target.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF67E86A)), |p| {
            p.move_to(18.469, 15.891)
                .line_to_relative(4.081, -4.081)
                .curve_to_relative(0.333, -0.333, 0.333, -0.87, 0.001, -1.201)
                .curve_to_relative(-0.333, -0.333, -0.869, -0.333, -1.202, -0.001)
                .line_to_relative(-4.081, 4.082)
                .line_to_relative(-4.081, -4.082)
                .curve_to_relative(-0.333, -0.332, -0.871, -0.333, -1.202, 0.001)
                .curve_to_relative(-0.332, 0.332, -0.332, 0.869, 0.001, 1.201)
                .line_to_relative(4.081, 4.081)
                .line_to_relative(-4.081, 4.082)
                .curve_to_relative(-0.333, 0.332, -0.333, 0.869, -0.001, 1.201)
                .curve_to_relative(0.167, 0.166, 0.384, 0.249, 0.601, 0.249)
                .curve_to_relative(0.217, 0.0, 0.435, -0.083, 0.601, -0.249)
                .line_to_relative(4.081, -4.081)
                .line_to_relative(4.081, 4.081)
                .curve_to_relative(0.167, 0.166, 0.384, 0.249, 0.601, 0.249)
                .curve_to_relative(0.217, 0.0, 0.435, -0.083, 0.601, -0.249)
                .curve_to_relative(0.332, -0.332, 0.332, -0.869, -0.001, -1.201)
                .line_to(18.469, 15.891)
                .close()
        })
        .path(PathStyle::new().fill(Color::from_argb(0xFF67E86A)), |p| {
            p.move_to(4.835, 10.157)
                .curve_to_relative(-0.004, 0.0, -0.007, 0.0, -0.011, 0.0)
                .curve_to(4.367, 10.148, 3.957, 9.604, 3.7, 8.665)
                .curve_to_relative(-0.187, -0.686, -0.357, -1.4, -0.521, -2.092)
                .curve_to(3.076, 6.139, 2.974, 5.706, 2.866, 5.277)
                .line_to(2.795, 4.988)
                .curve_to_relative(-0.243, -0.99, -0.494, -2.014, -1.148, -2.129)
                .curve_to(1.57, 2.846, 1.52, 2.772, 1.533, 2.695)
                .curve_to_relative(0.013, -0.077, 0.085, -0.125, 0.162, -0.115)
                .curve_to_relative(0.834, 0.147, 1.107, 1.262, 1.371, 2.34)
                .line_to_relative(0.071, 0.287)
                .curve_to_relative(0.108, 0.43, 0.211, 0.865, 0.314, 1.299)
                .curve_to(3.615, 7.196, 3.784, 7.908, 3.97, 8.589)
                .curve_to_relative(0.212, 0.775, 0.549, 1.279, 0.86, 1.285)
                .curve_to_relative(0.002, 0.0, 0.004, 0.0, 0.005, 0.0)
                .curve_to_relative(0.291, 0.0, 0.595, -0.437, 0.834, -1.201)
                .curve_to_relative(0.123, -0.394, 0.229, -0.819, 0.332, -1.23)
                .line_to_relative(0.082, -0.325)
                .curve_to_relative(0.091, -0.357, 0.176, -0.719, 0.262, -1.081)
                .curve_to(6.52, 5.295, 6.701, 4.528, 6.922, 3.818)
                .curve_to_relative(0.245, -0.787, 0.611, -1.223, 1.029, -1.227)
                .curve_to_relative(0.002, 0.0, 0.004, 0.0, 0.005, 0.0)
                .curve_to_relative(0.42, 0.0, 0.795, 0.433, 1.054, 1.22)
                .curve_to_relative(0.183, 0.554, 0.338, 1.152, 0.487, 1.73)
                .line_to_relative(0.116, 0.447)
                .curve_to_relative(0.097, 0.368, 0.189, 0.741, 0.283, 1.113)
                .curve_to_relative(0.158, 0.637, 0.322, 1.296, 0.506, 1.917)
                .curve_to_relative(0.151, 0.513, 0.407, 0.839, 0.669, 0.853)
                .curve_to(11.306, 9.9, 11.55, 9.63, 11.736, 9.178)
                .curve_to_relative(0.179, -0.434, 0.342, -0.939, 0.5, -1.544)
                .curve_to_relative(0.219, -0.842, 0.427, -1.696, 0.634, -2.55)
                .curve_to_relative(0.096, -0.394, 0.191, -0.788, 0.288, -1.181)
                .curve_to_relative(0.185, -0.75, 0.534, -1.181, 1.066, -1.321)
                .curve_to_relative(0.073, -0.019, 0.15, 0.026, 0.17, 0.102)
                .curve_to_relative(0.019, 0.076, -0.026, 0.153, -0.101, 0.173)
                .curve_to_relative(-0.429, 0.112, -0.703, 0.466, -0.864, 1.115)
                .curve_to_relative(-0.097, 0.393, -0.193, 0.786, -0.288, 1.18)
                .curve_to_relative(-0.208, 0.855, -0.416, 1.711, -0.635, 2.555)
                .curve_to_relative(-0.161, 0.618, -0.329, 1.135, -0.513, 1.581)
                .curve_to_relative(-0.321, 0.779, -0.721, 0.879, -0.938, 0.867)
                .curve_to_relative(-0.388, -0.02, -0.733, -0.414, -0.922, -1.055)
                .curve_to(9.949, 8.473, 9.785, 7.811, 9.625, 7.171)
                .curve_to_relative(-0.092, -0.371, -0.184, -0.742, -0.281, -1.11)
                .line_to(9.228, 5.613)
                .curve_to(9.08, 5.039, 8.926, 4.446, 8.747, 3.901)
                .curve_to_relative(-0.213, -0.643, -0.508, -1.026, -0.79, -1.026)
                .curve_to_relative(-0.001, 0.0, -0.002, 0.0, -0.002, 0.0)
                .curve_to_relative(-0.28, 0.002, -0.567, 0.387, -0.766, 1.029)
                .curve_to_relative(-0.218, 0.701, -0.398, 1.463, -0.572, 2.2)
                .curve_to(6.53, 6.466, 6.444, 6.83, 6.354, 7.188)
                .line_to(6.273, 7.512)
                .curve_to(6.169, 7.927, 6.062, 8.356, 5.936, 8.758)
                .curve_to(5.575, 9.911, 5.14, 10.157, 4.835, 10.157)
                .close()
                .move_to(14.255, 6.845)
                .horizontal_line_to(1.666)
                .curve_to(1.408, 6.845, 1.2, 6.631, 1.2, 6.367)
                .curve_to_relative(0.0, -0.264, 0.208, -0.478, 0.466, -0.478)
                .horizontal_line_to_relative(12.589)
                .curve_to_relative(0.258, 0.0, 0.466, 0.214, 0.466, 0.478)
                .curve_to(14.721, 6.631, 14.512, 6.845, 14.255, 6.845)
                .close()
        })
        .build()
});

/// Icon for Eating Soon Temp Target.
pub static IC_TT_EATING_SOON: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcTtEatingSoon", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Eating Soon Temp Target.")
        .path(PathStyle::new().fill(Color::from_argb(0xFFFEAF05)), |p| {
            p.move_to(22.353, 21.291)
                .horizontal_line_to_relative(-0.575)
                .curve_to_relative(-0.257, -3.61, -2.891, -6.589, -6.324, -7.38)
                .curve_to_relative(-0.1, -0.916, -0.868, -1.633, -1.81, -1.633)
                .curve_to_relative(-0.942, 0.0, -1.711, 0.718, -1.81, 1.634)
                .curve_to_relative(-3.433, 0.791, -6.066, 3.77, -6.324, 7.38)
                .horizontal_line_to(4.935)
                .curve_to_relative(-0.247, 0.0, -0.447, 0.2, -0.447, 0.447)
                .curve_to_relative(0.0, 0.246, 0.2, 0.447, 0.447, 0.447)
                .horizontal_line_to_relative(17.418)
                .curve_to_relative(0.246, 0.0, 0.447, -0.2, 0.447, -0.447)
                .curve_to(22.8, 21.492, 22.6, 21.291, 22.353, 21.291)
                .close()
                .move_to(13.644, 12.964)
                .curve_to_relative(0.515, 0.0, 0.934, 0.347, 1.077, 0.816)
                .curve_to_relative(-0.354, -0.048, -0.712, -0.081, -1.077, -0.081)
                .curve_to_relative(-0.366, 0.0, -0.724, 0.033, -1.078, 0.081)
                .curve_to(12.71, 13.312, 13.13, 12.964, 13.644, 12.964)
                .close()
                .move_to(13.644, 14.594)
                .curve_to_relative(3.789, 0.0, 6.94, 2.966, 7.239, 6.698)
                .horizontal_line_to(6.406)
                .curve_to(6.704, 17.559, 9.856, 14.594, 13.644, 14.594)
                .close()
                .move_to(16.008, 15.809)
                .curve_to_relative(-0.657, -0.303, -1.581, -0.51, -2.534, -0.569)
                .curve_to_relative(-0.247, -0.015, -0.459, 0.173, -0.474, 0.419)
                .curve_to_relative(-0.015, 0.247, 0.173, 0.459, 0.419, 0.474)
                .curve_to_relative(0.833, 0.051, 1.661, 0.233, 2.213, 0.488)
                .curve_to_relative(0.052, 0.024, 0.106, 0.037, 0.16, 0.04)
                .curve_to_relative(0.178, 0.011, 0.354, -0.087, 0.434, -0.259)
                .curve_to(16.33, 16.179, 16.232, 15.913, 16.008, 15.809)
                .close()
                .move_to(7.765, 20.627)
                .curve_to_relative(-0.033, 0.001, -0.068, -0.003, -0.106, -0.013)
                .curve_to_relative(-0.21, -0.053, -0.34, -0.267, -0.287, -0.477)
                .curve_to_relative(0.48, -1.929, 1.86, -3.571, 3.692, -4.394)
                .curve_to_relative(0.048, -0.021, 0.099, -0.033, 0.151, -0.034)
                .curve_to_relative(0.16, -0.004, 0.305, 0.087, 0.37, 0.232)
                .curve_to_relative(0.044, 0.096, 0.047, 0.204, 0.009, 0.302)
                .curve_to_relative(-0.038, 0.098, -0.111, 0.177, -0.207, 0.219)
                .curve_to_relative(-1.613, 0.725, -2.828, 2.17, -3.25, 3.864)
                .curve_to(8.095, 20.499, 7.942, 20.622, 7.765, 20.627)
                .close()
        })
        .path(PathStyle::new().fill(Color::from_argb(0xFF67E86A)), |p| {
            p.move_to(4.835, 9.393)
                .curve_to_relative(-0.004, 0.0, -0.007, 0.0, -0.011, 0.0)
                .curve_to(4.367, 9.385, 3.957, 8.841, 3.7, 7.901)
                .curve_to_relative(-0.187, -0.686, -0.357, -1.4, -0.521, -2.092)
                .curve_to(3.076, 5.376, 2.974, 4.943, 2.866, 4.514)
                .line_to(2.795, 4.225)
                .curve_to_relative(-0.243, -0.99, -0.494, -2.014, -1.148, -2.129)
                .curve_to(1.57, 2.083, 1.52, 2.009, 1.533, 1.932)
                .curve_to_relative(0.013, -0.077, 0.085, -0.126, 0.162, -0.115)
                .curve_to_relative(0.834, 0.147, 1.107, 1.262, 1.371, 2.34)
                .line_to_relative(0.071, 0.287)
                .curve_to_relative(0.108, 0.43, 0.211, 0.865, 0.314, 1.299)
                .curve_to(3.615, 6.433, 3.784, 7.145, 3.97, 7.826)
                .curve_to(4.181, 8.601, 4.519, 9.105, 4.83, 9.11)
                .curve_to_relative(0.002, 0.0, 0.004, 0.0, 0.005, 0.0)
                .curve_to_relative(0.291, 0.0, 0.595, -0.437, 0.834, -1.201)
                .curve_to_relative(0.123, -0.394, 0.229, -0.819, 0.332, -1.23)
                .line_to_relative(0.082, -0.325)
                .curve_to_relative(0.091, -0.357, 0.176, -0.719, 0.262, -1.081)
                .curve_to(6.52, 4.532, 6.701, 3.765, 6.922, 3.055)
                .curve_to_relative(0.245, -0.787, 0.611, -1.223, 1.029, -1.227)
                .curve_to_relative(0.002, 0.0, 0.004, 0.0, 0.005, 0.0)
                .curve_to_relative(0.42, 0.0, 0.795, 0.433, 1.054, 1.22)
                .curve_to(9.194, 3.602, 9.349, 4.2, 9.498, 4.778)
                .line_to_relative(0.116, 0.447)
                .curve_to_relative(0.097, 0.368, 0.189, 0.741, 0.283, 1.113)
                .curve_to_relative(0.158, 0.637, 0.322, 1.296, 0.506, 1.917)
                .curve_to_relative(0.151, 0.513, 0.407, 0.839, 0.669, 0.853)
                .curve_to_relative(0.234, 0.029, 0.479, -0.241, 0.665, -0.693)
                .curve_to_relative(0.179, -0.434, 0.342, -0.939, 0.5, -1.544)
                .curve_to_relative(0.219, -0.842, 0.427, -1.696, 0.634, -2.55)
                .curve_to_relative(0.096, -0.394, 0.191, -0.788, 0.288, -1.181)
                .curve_to_relative(0.185, -0.75, 0.534, -1.181, 1.066, -1.321)
                .curve_to_relative(0.073, -0.019, 0.15, 0.026, 0.17, 0.102)
                .curve_to_relative(0.019, 0.076, -0.026, 0.153, -0.101, 0.173)
                .curve_to_relative(-0.429, 0.112, -0.703, 0.466, -0.864, 1.115)
                .curve_to_relative(-0.097, 0.393, -0.193, 0.786, -0.288, 1.18)
                .curve_to_relative(-0.208, 0.855, -0.416, 1.711, -0.635, 2.555)
                .curve_to_relative(-0.161, 0.618, -0.329, 1.135, -0.513, 1.581)
                .curve_to_relative(-0.321, 0.779, -0.721, 0.879, -0.938, 0.867)
                .curve_to_relative(-0.388, -0.02, -0.733, -0.414, -0.922, -1.055)
                .curve_to(9.949, 7.709, 9.785, 7.047, 9.625, 6.407)
                .curve_to_relative(-0.092, -0.371, -0.184, -0.742, -0.281, -1.11)
                .line_to(9.228, 4.849)
                .curve_to(9.08, 4.276, 8.926, 3.683, 8.747, 3.138)
                .curve_to_relative(-0.213, -0.643, -0.508, -1.026, -0.79, -1.026)
                .curve_to_relative(-0.001, 0.0, -0.002, 0.0, -0.002, 0.0)
                .curve_to(7.675, 2.114, 7.389, 2.498, 7.189, 3.14)
                .curve_to_relative(-0.218, 0.701, -0.398, 1.463, -0.572, 2.2)
                .curve_to(6.531, 5.703, 6.444, 6.067, 6.354, 6.425)
                .line_to(6.273, 6.749)
                .curve_to(6.169, 7.164, 6.062, 7.593, 5.936, 7.995)
                .curve_to(5.575, 9.148, 5.14, 9.393, 4.835, 9.393)
                .close()
                .move_to(11.12, 8.463)
                .horizontal_line_to(4.815)
                .curve_to_relative(-0.257, 0.0, -0.466, -0.214, -0.466, -0.478)
                .line_to_relative(0.0, -1.903)
                .horizontal_line_to(1.666)
                .curve_to(1.408, 6.082, 1.2, 5.868, 1.2, 5.604)
                .curve_to_relative(0.0, -0.264, 0.208, -0.478, 0.466, -0.478)
                .horizontal_line_to_relative(3.149)
                .curve_to_relative(0.257, 0.0, 0.466, 0.214, 0.466, 0.478)
                .line_to_relative(0.0, 1.903)
                .horizontal_line_to_relative(5.372)
                .vertical_line_to(5.604)
                .curve_to_relative(0.0, -0.264, 0.209, -0.478, 0.466, -0.478)
                .horizontal_line_to_relative(3.135)
                .curve_to_relative(0.258, 0.0, 0.466, 0.214, 0.466, 0.478)
                .curve_to_relative(0.0, 0.264, -0.209, 0.478, -0.466, 0.478)
                .horizontal_line_to_relative(-2.668)
                .vertical_line_to_relative(1.903)
                .curve_to(11.586, 8.249, 11.378, 8.463, 11.12, 8.463)
                .close()
        })
        .build()
});

/// Icon for High Temp Target.
pub static IC_TT_HIGH: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcTtHigh", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for High Temp Target.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF67E86A)), |p| {
            p.move_to(7.0, 17.978)
                .curve_to_relative(-0.006, 0.0, -0.011, 0.0, -0.017, 0.0)
                .curve_to_relative(-0.731, -0.013, -1.385, -0.871, -1.796, -2.354)
                .curve_to_relative(-0.299, -1.082, -0.57, -2.209, -0.832, -3.301)
                .curve_to_relative(-0.164, -0.683, -0.328, -1.367, -0.5, -2.044)
                .line_to(3.74, 9.824)
                .curve_to(3.352, 8.262, 2.952, 6.647, 1.906, 6.465)
                .curve_to_relative(-0.122, -0.021, -0.203, -0.137, -0.182, -0.259)
                .curve_to_relative(0.021, -0.121, 0.136, -0.198, 0.259, -0.181)
                .curve_to_relative(1.332, 0.232, 1.769, 1.991, 2.191, 3.692)
                .line_to_relative(0.113, 0.454)
                .curve_to_relative(0.172, 0.678, 0.337, 1.364, 0.502, 2.05)
                .curve_to_relative(0.261, 1.088, 0.532, 2.211, 0.829, 3.286)
                .curve_to_relative(0.338, 1.222, 0.877, 2.017, 1.374, 2.027)
                .curve_to_relative(0.003, 0.0, 0.006, 0.0, 0.009, 0.0)
                .curve_to_relative(0.465, 0.0, 0.951, -0.69, 1.333, -1.895)
                .curve_to_relative(0.197, -0.622, 0.366, -1.292, 0.53, -1.94)
                .line_to_relative(0.13, -0.512)
                .curve_to_relative(0.145, -0.563, 0.281, -1.135, 0.418, -1.706)
                .curve_to_relative(0.28, -1.17, 0.57, -2.38, 0.923, -3.501)
                .curve_to_relative(0.391, -1.242, 0.975, -1.93, 1.644, -1.935)
                .curve_to_relative(0.003, 0.0, 0.006, 0.0, 0.009, 0.0)
                .curve_to_relative(0.671, 0.0, 1.269, 0.683, 1.684, 1.925)
                .curve_to_relative(0.292, 0.875, 0.54, 1.817, 0.778, 2.73)
                .line_to_relative(0.186, 0.705)
                .curve_to_relative(0.155, 0.581, 0.303, 1.169, 0.451, 1.757)
                .curve_to_relative(0.252, 1.005, 0.514, 2.044, 0.808, 3.025)
                .curve_to_relative(0.241, 0.809, 0.651, 1.324, 1.068, 1.345)
                .curve_to_relative(0.375, 0.045, 0.766, -0.381, 1.062, -1.094)
                .curve_to_relative(0.285, -0.684, 0.547, -1.482, 0.799, -2.436)
                .curve_to_relative(0.35, -1.329, 0.681, -2.676, 1.013, -4.024)
                .curve_to_relative(0.153, -0.622, 0.306, -1.244, 0.461, -1.863)
                .curve_to(20.593, 6.929, 21.15, 6.248, 22.0, 6.028)
                .curve_to_relative(0.117, -0.029, 0.24, 0.042, 0.272, 0.161)
                .curve_to_relative(0.031, 0.12, -0.041, 0.241, -0.161, 0.272)
                .curve_to_relative(-0.685, 0.177, -1.124, 0.736, -1.38, 1.759)
                .curve_to_relative(-0.155, 0.619, -0.308, 1.241, -0.46, 1.862)
                .curve_to_relative(-0.332, 1.349, -0.665, 2.699, -1.015, 4.031)
                .curve_to_relative(-0.258, 0.975, -0.525, 1.791, -0.819, 2.495)
                .curve_to_relative(-0.512, 1.229, -1.152, 1.387, -1.498, 1.368)
                .curve_to_relative(-0.62, -0.032, -1.171, -0.654, -1.474, -1.664)
                .curve_to_relative(-0.296, -0.989, -0.558, -2.034, -0.813, -3.044)
                .curve_to_relative(-0.147, -0.586, -0.295, -1.171, -0.448, -1.751)
                .line_to_relative(-0.187, -0.708)
                .curve_to_relative(-0.236, -0.905, -0.481, -1.84, -0.769, -2.701)
                .curve_to_relative(-0.34, -1.015, -0.811, -1.619, -1.262, -1.619)
                .curve_to_relative(-0.002, 0.0, -0.003, 0.0, -0.004, 0.0)
                .curve_to(11.536, 6.493, 11.079, 7.1, 10.76, 8.112)
                .curve_to_relative(-0.348, 1.106, -0.636, 2.308, -0.914, 3.47)
                .curve_to_relative(-0.138, 0.574, -0.275, 1.147, -0.42, 1.713)
                .line_to_relative(-0.13, 0.511)
                .curve_to_relative(-0.166, 0.655, -0.337, 1.332, -0.538, 1.966)
                .curve_to(8.182, 17.59, 7.487, 17.978, 7.0, 17.978)
                .close()
                .move_to(22.055, 12.745)
                .horizontal_line_to(17.04)
                .curve_to_relative(-0.411, 0.0, -0.745, -0.333, -0.745, -0.745)
                .vertical_line_to(9.034)
                .horizontal_line_to(7.72)
                .line_to(7.72, 12.0)
                .curve_to_relative(0.0, 0.411, -0.333, 0.745, -0.744, 0.745)
                .horizontal_line_to(1.944)
                .curve_to(1.533, 12.745, 1.2, 12.411, 1.2, 12.0)
                .curve_to_relative(0.0, -0.411, 0.333, -0.744, 0.744, -0.744)
                .horizontal_line_to_relative(4.286)
                .line_to_relative(0.001, -2.966)
                .curve_to_relative(0.0, -0.411, 0.333, -0.744, 0.744, -0.744)
                .horizontal_line_to(17.04)
                .curve_to_relative(0.411, 0.0, 0.745, 0.333, 0.745, 0.744)
                .vertical_line_to_relative(2.966)
                .horizontal_line_to_relative(4.27)
                .curve_to_relative(0.411, 0.0, 0.745, 0.333, 0.745, 0.744)
                .curve_to(22.8, 12.411, 22.467, 12.745, 22.055, 12.745)
                .close()
        })
        .build()
});

/// Icon for Hypo Temp Target.
pub static IC_TT_HYPO: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcTtHypo", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Hypo Temp Target.")
        .path(PathStyle::new().fill(Color::from_argb(0xFFFF1313)), |p| {
            p.move_to(8.57, 18.055)
                .curve_to_relative(-0.018, -0.311, 0.025, -0.602, 0.403, -0.646)
                .curve_to_relative(0.347, -0.041, 0.472, 0.21, 0.512, 0.497)
                .curve_to_relative(0.15, 1.09, 0.743, 1.733, 1.849, 1.876)
                .curve_to_relative(0.324, 0.042, 0.57, 0.185, 0.509, 0.552)
                .curve_to_relative(-0.056, 0.338, -0.359, 0.374, -0.63, 0.373)
                .curve_to(9.909, 20.704, 8.585, 19.368, 8.57, 18.055)
                .close()
                .move_to(15.653, 16.915)
                .curve_to_relative(-0.699, -2.754, -3.75, -7.008, -4.183, -7.008)
                .curve_to_relative(-0.433, 0.0, -3.494, 4.263, -4.19, 7.011)
                .curve_to_relative(-0.466, 1.838, 0.124, 3.416, 1.749, 4.489)
                .curve_to_relative(1.586, 1.047, 3.296, 1.03, 4.881, -0.014)
                .curve_to(15.537, 20.32, 16.123, 18.767, 15.653, 16.915)
                .close()
                .move_to(13.485, 20.75)
                .curve_to_relative(-0.669, 0.44, -1.353, 0.664, -2.034, 0.664)
                .curve_to_relative(-0.673, 0.0, -1.345, -0.218, -1.998, -0.65)
                .curve_to_relative(-1.338, -0.882, -1.817, -2.113, -1.427, -3.657)
                .curve_to_relative(0.542, -2.139, 3.21, -5.916, 3.443, -5.916)
                .curve_to_relative(0.233, 0.0, 2.893, 3.773, 3.437, 5.913)
                .curve_to(15.297, 18.644, 14.819, 19.871, 13.485, 20.75)
                .close()
                .move_to(20.433, 17.649)
                .vertical_line_to_relative(-7.442)
                .horizontal_line_to_relative(-1.578)
                .vertical_line_to_relative(7.442)
                .horizontal_line_to_relative(-2.367)
                .line_to_relative(3.156, 4.236)
                .line_to_relative(3.156, -4.236)
                .horizontal_line_to(20.433)
                .close()
        })
        .path(PathStyle::new().fill(Color::from_argb(0xFF67E86A)), |p| {
            p.move_to(4.835, 9.393)
                .curve_to_relative(-0.004, 0.0, -0.007, 0.0, -0.011, 0.0)
                .curve_to(4.367, 9.385, 3.957, 8.841, 3.7, 7.901)
                .curve_to_relative(-0.187, -0.686, -0.357, -1.4, -0.521, -2.092)
                .curve_to(3.076, 5.376, 2.974, 4.943, 2.866, 4.514)
                .line_to(2.795, 4.225)
                .curve_to_relative(-0.243, -0.99, -0.494, -2.014, -1.148, -2.129)
                .curve_to(1.57, 2.083, 1.52, 2.009, 1.533, 1.932)
                .curve_to_relative(0.013, -0.077, 0.085, -0.126, 0.162, -0.115)
                .curve_to_relative(0.834, 0.147, 1.107, 1.262, 1.371, 2.34)
                .line_to_relative(0.071, 0.287)
                .curve_to_relative(0.108, 0.43, 0.211, 0.865, 0.314, 1.299)
                .curve_to(3.615, 6.433, 3.784, 7.145, 3.97, 7.826)
                .curve_to(4.181, 8.601, 4.519, 9.105, 4.83, 9.11)
                .curve_to_relative(0.002, 0.0, 0.004, 0.0, 0.005, 0.0)
                .curve_to_relative(0.291, 0.0, 0.595, -0.437, 0.834, -1.201)
                .curve_to_relative(0.123, -0.394, 0.229, -0.819, 0.332, -1.23)
                .line_to_relative(0.082, -0.325)
                .curve_to_relative(0.091, -0.357, 0.176, -0.719, 0.262, -1.081)
                .curve_to(6.52, 4.532, 6.701, 3.765, 6.922, 3.055)
                .curve_to_relative(0.245, -0.787, 0.611, -1.223, 1.029, -1.227)
                .curve_to_relative(0.002, 0.0, 0.004, 0.0, 0.005, 0.0)
                .curve_to_relative(0.42, 0.0, 0.795, 0.433, 1.054, 1.22)
                .curve_to(9.194, 3.602, 9.349, 4.2, 9.498, 4.778)
                .line_to_relative(0.116, 0.447)
                .curve_to_relative(0.097, 0.368, 0.189, 0.741, 0.283, 1.113)
                .curve_to_relative(0.158, 0.637, 0.322, 1.296, 0.506, 1.917)
                .curve_to_relative(0.151, 0.513, 0.407, 0.839, 0.669, 0.853)
                .curve_to_relative(0.234, 0.029, 0.479, -0.241, 0.665, -0.693)
                .curve_to_relative(0.179, -0.434, 0.342, -0.939, 0.5, -1.544)
                .curve_to_relative(0.219, -0.842, 0.427, -1.696, 0.634, -2.55)
                .curve_to_relative(0.096, -0.394, 0.191, -0.788, 0.288, -1.181)
                .curve_to_relative(0.185, -0.75, 0.534, -1.181, 1.066, -1.321)
                .curve_to_relative(0.073, -0.019, 0.15, 0.026, 0.17, 0.102)
                .curve_to_relative(0.019, 0.076, -0.026, 0.153, -0.101, 0.173)
                .curve_to_relative(-0.429, 0.112, -0.703, 0.466, -0.864, 1.115)
                .curve_to_relative(-0.097, 0.393, -0.193, 0.786, -0.288, 1.18)
                .curve_to_relative(-0.208, 0.855, -0.416, 1.711, -0.635, 2.555)
                .curve_to_relative(-0.161, 0.618, -0.329, 1.135, -0.513, 1.581)
                .curve_to_relative(-0.321, 0.779, -0.721, 0.879, -0.938, 0.867)
                .curve_to_relative(-0.388, -0.02, -0.733, -0.414, -0.922, -1.055)
                .curve_to(9.949, 7.709, 9.785, 7.047, 9.625, 6.407)
                .curve_to_relative(-0.092, -0.371, -0.184, -0.742, -0.281, -1.11)
                .line_to(9.228, 4.849)
                .curve_to(9.08, 4.276, 8.926, 3.683, 8.747, 3.138)
                .curve_to_relative(-0.213, -0.643, -0.508, -1.026, -0.79, -1.026)
                .curve_to_relative(-0.001, 0.0, -0.002, 0.0, -0.002, 0.0)
                .curve_to(7.675, 2.114, 7.389, 2.498, 7.189, 3.14)
                .curve_to_relative(-0.218, 0.701, -0.398, 1.463, -0.572, 2.2)
                .curve_to(6.531, 5.703, 6.444, 6.067, 6.354, 6.425)
                .line_to(6.273, 6.749)
                .curve_to(6.169, 7.164, 6.062, 7.593, 5.936, 7.995)
                .curve_to(5.575, 9.148, 5.14, 9.393, 4.835, 9.393)
                .close()
                .move_to(14.255, 6.082)
                .horizontal_line_to_relative(-3.139)
                .curve_to_relative(-0.258, 0.0, -0.466, -0.214, -0.466, -0.478)
                .vertical_line_to(3.701)
                .horizontal_line_to(5.281)
                .line_to_relative(0.0, 1.904)
                .curve_to_relative(0.0, 0.264, -0.209, 0.478, -0.466, 0.478)
                .horizontal_line_to(1.666)
                .curve_to(1.408, 6.082, 1.2, 5.868, 1.2, 5.604)
                .curve_to_relative(0.0, -0.264, 0.208, -0.478, 0.466, -0.478)
                .horizontal_line_to_relative(2.683)
                .line_to_relative(0.0, -1.904)
                .curve_to_relative(0.0, -0.264, 0.209, -0.478, 0.466, -0.478)
                .horizontal_line_to_relative(6.3)
                .curve_to_relative(0.258, 0.0, 0.466, 0.214, 0.466, 0.478)
                .vertical_line_to_relative(1.904)
                .horizontal_line_to_relative(2.673)
                .curve_to_relative(0.258, 0.0, 0.466, 0.214, 0.466, 0.478)
                .curve_to(14.721, 5.868, 14.512, 6.082, 14.255, 6.082)
                .close()
        })
        .build()
});

/// Icon for Manual Temp Target.
pub static IC_TT_MANUAL: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcTtManual", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for Manual Temp Target.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF67E86A)), |p| {
            p.move_to(17.655, 8.401)
                .line_to_relative(-7.911, 7.911)
                .curve_to_relative(-0.063, 0.063, -0.106, 0.144, -0.122, 0.232)
                .line_to_relative(-0.944, 5.121)
                .curve_to_relative(-0.026, 0.143, 0.019, 0.289, 0.122, 0.391)
                .curve_to_relative(0.103, 0.103, 0.249, 0.148, 0.391, 0.122)
                .line_to_relative(5.121, -0.944)
                .curve_to_relative(0.088, -0.016, 0.169, -0.059, 0.232, -0.122)
                .line_to_relative(7.911, -7.911)
                .curve_to_relative(0.461, -0.461, 0.46, -1.213, -0.003, -1.676)
                .line_to(19.33, 8.403)
                .curve_to(18.868, 7.941, 18.116, 7.939, 17.655, 8.401)
                .close()
                .move_to(13.491, 20.02)
                .curve_to_relative(0.101, 0.101, 0.137, 0.249, 0.094, 0.385)
                .curve_to_relative(-0.019, 0.06, -0.052, 0.113, -0.094, 0.155)
                .curve_to_relative(-0.054, 0.054, -0.125, 0.092, -0.204, 0.106)
                .line_to_relative(-2.552, 0.451)
                .curve_to_relative(-0.253, -0.008, -0.504, -0.107, -0.698, -0.3)
                .curve_to_relative(-0.193, -0.193, -0.292, -0.444, -0.3, -0.697)
                .line_to_relative(0.451, -2.552)
                .curve_to_relative(0.025, -0.14, 0.126, -0.255, 0.261, -0.298)
                .curve_to_relative(0.136, -0.043, 0.284, -0.006, 0.385, 0.094)
                .line_to(13.491, 20.02)
                .close()
                .move_to(21.794, 12.084)
                .curve_to_relative(0.146, 0.146, 0.146, 0.382, 0.0, 0.528)
                .line_to_relative(-6.991, 6.991)
                .curve_to_relative(-0.146, 0.146, -0.382, 0.146, -0.528, 0.0)
                .line_to_relative(-0.275, -0.275)
                .curve_to_relative(-0.146, -0.146, -0.146, -0.382, 0.0, -0.528)
                .line_to_relative(6.991, -6.991)
                .curve_to_relative(0.146, -0.146, 0.382, -0.146, 0.528, 0.0)
                .line_to(21.794, 12.084)
                .close()
                .move_to(20.431, 10.699)
                .curve_to_relative(0.146, 0.146, 0.146, 0.382, 0.0, 0.528)
                .line_to_relative(-6.991, 6.991)
                .curve_to_relative(-0.146, 0.146, -0.382, 0.146, -0.528, 0.0)
                .line_to_relative(-0.275, -0.275)
                .curve_to_relative(-0.146, -0.146, -0.146, -0.382, 0.0, -0.528)
                .line_to_relative(6.991, -6.991)
                .curve_to_relative(0.146, -0.146, 0.382, -0.146, 0.528, 0.0)
                .line_to(20.431, 10.699)
                .close()
                .move_to(19.068, 9.314)
                .curve_to_relative(0.146, 0.146, 0.146, 0.382, 0.0, 0.528)
                .line_to_relative(-6.991, 6.991)
                .curve_to_relative(-0.146, 0.146, -0.382, 0.146, -0.528, 0.0)
                .line_to_relative(-0.275, -0.275)
                .curve_to_relative(-0.146, -0.146, -0.146, -0.382, 0.0, -0.528)
                .line_to_relative(6.991, -6.991)
                .curve_to_relative(0.146, -0.146, 0.382, -0.146, 0.528, 0.0)
                .line_to(19.068, 9.314)
                .close()
        })
        .path(PathStyle::new().fill(Color::from_argb(0xFF67E86A)), |p| {
            p.move_to(4.835, 9.393)
                .curve_to_relative(-0.004, 0.0, -0.007, 0.0, -0.011, 0.0)
                .curve_to(4.367, 9.385, 3.957, 8.841, 3.7, 7.901)
                .curve_to_relative(-0.187, -0.686, -0.357, -1.4, -0.521, -2.092)
                .curve_to(3.076, 5.376, 2.974, 4.943, 2.866, 4.514)
                .line_to(2.795, 4.225)
                .curve_to_relative(-0.243, -0.99, -0.494, -2.014, -1.148, -2.129)
                .curve_to(1.57, 2.083, 1.52, 2.009, 1.533, 1.932)
                .curve_to_relative(0.013, -0.077, 0.085, -0.126, 0.162, -0.115)
                .curve_to_relative(0.834, 0.147, 1.107, 1.262, 1.371, 2.34)
                .line_to_relative(0.071, 0.287)
                .curve_to_relative(0.108, 0.43, 0.211, 0.865, 0.314, 1.299)
                .curve_to(3.615, 6.433, 3.784, 7.145, 3.97, 7.826)
                .curve_to(4.181, 8.601, 4.519, 9.105, 4.83, 9.11)
                .curve_to_relative(0.002, 0.0, 0.004, 0.0, 0.005, 0.0)
                .curve_to_relative(0.291, 0.0, 0.595, -0.437, 0.834, -1.201)
                .curve_to_relative(0.123, -0.394, 0.229, -0.819, 0.332, -1.23)
                .line_to_relative(0.082, -0.325)
                .curve_to_relative(0.091, -0.357, 0.176, -0.719, 0.262, -1.081)
                .curve_to(6.52, 4.532, 6.701, 3.765, 6.922, 3.055)
                .curve_to_relative(0.245, -0.787, 0.611, -1.223, 1.029, -1.227)
                .curve_to_relative(0.002, 0.0, 0.004, 0.0, 0.005, 0.0)
                .curve_to_relative(0.42, 0.0, 0.795, 0.433, 1.054, 1.22)
                .curve_to(9.194, 3.602, 9.349, 4.2, 9.498, 4.778)
                .line_to_relative(0.116, 0.447)
                .curve_to_relative(0.097, 0.368, 0.189, 0.741, 0.283, 1.113)
                .curve_to_relative(0.158, 0.637, 0.322, 1.296, 0.506, 1.917)
                .curve_to_relative(0.151, 0.513, 0.407, 0.839, 0.669, 0.853)
                .curve_to_relative(0.234, 0.029, 0.479, -0.241, 0.665, -0.693)
                .curve_to_relative(0.179, -0.434, 0.342, -0.939, 0.5, -1.544)
                .curve_to_relative(0.219, -0.842, 0.427, -1.696, 0.634, -2.55)
                .curve_to_relative(0.096, -0.394, 0.191, -0.788, 0.288, -1.181)
                .curve_to_relative(0.185, -0.75, 0.534, -1.181, 1.066, -1.321)
                .curve_to_relative(0.073, -0.019, 0.15, 0.026, 0.17, 0.102)
                .curve_to_relative(0.019, 0.076, -0.026, 0.153, -0.101, 0.173)
                .curve_to_relative(-0.429, 0.112, -0.703, 0.466, -0.864, 1.115)
                .curve_to_relative(-0.097, 0.393, -0.193, 0.786, -0.288, 1.18)
                .curve_to_relative(-0.208, 0.855, -0.416, 1.711, -0.635, 2.555)
                .curve_to_relative(-0.161, 0.618, -0.329, 1.135, -0.513, 1.581)
                .curve_to_relative(-0.321, 0.779, -0.721, 0.879, -0.938, 0.867)
                .curve_to_relative(-0.388, -0.02, -0.733, -0.414, -0.922, -1.055)
                .curve_to(9.949, 7.709, 9.785, 7.047, 9.625, 6.407)
                .curve_to_relative(-0.092, -0.371, -0.184, -0.742, -0.281, -1.11)
                .line_to(9.228, 4.849)
                .curve_to(9.08, 4.276, 8.926, 3.683, 8.747, 3.138)
                .curve_to_relative(-0.213, -0.643, -0.508, -1.026, -0.79, -1.026)
                .curve_to_relative(-0.001, 0.0, -0.002, 0.0, -0.002, 0.0)
                .curve_to(7.675, 2.114, 7.389, 2.498, 7.189, 3.14)
                .curve_to_relative(-0.218, 0.701, -0.398, 1.463, -0.572, 2.2)
                .curve_to(6.531, 5.703, 6.444, 6.067, 6.354, 6.425)
                .line_to(6.273, 6.749)
                .curve_to(6.169, 7.164, 6.062, 7.593, 5.936, 7.995)
                .curve_to(5.575, 9.148, 5.14, 9.393, 4.835, 9.393)
                .close()
                .move_to(14.255, 6.082)
                .horizontal_line_to_relative(-3.139)
                .curve_to_relative(-0.258, 0.0, -0.466, -0.214, -0.466, -0.478)
                .vertical_line_to(3.7)
                .horizontal_line_to(5.281)
                .line_to_relative(0.0, 1.904)
                .curve_to_relative(0.0, 0.264, -0.209, 0.478, -0.466, 0.478)
                .horizontal_line_to(1.666)
                .curve_to(1.408, 6.082, 1.2, 5.868, 1.2, 5.604)
                .curve_to_relative(0.0, -0.264, 0.208, -0.478, 0.466, -0.478)
                .horizontal_line_to_relative(2.683)
                .line_to_relative(0.0, -1.904)
                .curve_to_relative(0.0, -0.264, 0.209, -0.478, 0.466, -0.478)
                .horizontal_line_to_relative(6.3)
                .curve_to_relative(0.258, 0.0, 0.466, 0.214, 0.466, 0.478)
                .vertical_line_to_relative(1.904)
                .horizontal_line_to_relative(2.673)
                .curve_to_relative(0.258, 0.0, 0.466, 0.214, 0.466, 0.478)
                .curve_to(14.721, 5.868, 14.512, 6.082, 14.255, 6.082)
                .close()
        })
        .build()
});

/// Icon for User Entry.
pub static IC_USER_ENTRY: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcUserEntry", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for User Entry.")
        .path(PathStyle::new().fill(Color::from_argb(0xFF6AE86D)), |p| {
            p.move_to(13.892, 13.296)
                .curve_to_relative(-0.192, -0.004, -0.396, 0.017, -0.472, -0.238)
                .curve_to_relative(-0.064, -0.217, 0.003, -0.372, 0.171, -0.512)
                .curve_to_relative(0.879, -0.732, 1.037, -1.724, 0.995, -2.858)
                .curve_to_relative(0.0, -0.207, 0.018, -0.487, -0.003, -0.764)
                .curve_to_relative(-0.099, -1.274, -1.099, -2.248, -2.404, -2.36)
                .curve_to_relative(-1.183, -0.102, -2.393, 0.679, -2.606, 1.881)
                .curve_to_relative(-0.258, 1.454, -0.389, 2.954, 0.89, 4.105)
                .curve_to_relative(0.161, 0.146, 0.241, 0.288, 0.168, 0.508)
                .curve_to_relative(-0.083, 0.248, -0.281, 0.239, -0.476, 0.237)
                .curve_to_relative(-0.486, -0.007, -0.935, 0.116, -1.358, 0.348)
                .curve_to_relative(-1.362, 0.749, -1.46, 1.965, -0.231, 2.884)
                .curve_to_relative(1.818, 1.363, 5.527, 1.177, 7.199, -0.36)
                .curve_to_relative(0.659, -0.606, 0.711, -1.297, 0.118, -1.971)
                .curve_to(15.36, 13.604, 14.686, 13.311, 13.892, 13.296)
                .close()
                .move_to(14.201, 16.043)
                .curve_to_relative(-1.682, 0.68, -3.369, 0.698, -4.975, -0.221)
                .curve_to_relative(-0.81, -0.463, -0.767, -0.928, 0.064, -1.366)
                .curve_to_relative(0.347, -0.183, 0.724, -0.299, 1.121, -0.273)
                .curve_to_relative(0.487, 0.034, 0.89, -0.066, 1.071, -0.579)
                .curve_to_relative(0.196, -0.558, 0.428, -1.152, -0.147, -1.608)
                .curve_to_relative(-0.925, -0.733, -0.987, -1.714, -0.932, -2.771)
                .curve_to_relative(0.055, -1.02, 0.714, -1.762, 1.622, -1.747)
                .curve_to_relative(0.926, 0.015, 1.581, 0.74, 1.604, 1.776)
                .curve_to_relative(0.004, 0.167, 0.0, 0.334, 0.0, 0.638)
                .curve_to_relative(0.136, 0.704, -0.12, 1.383, -0.789, 1.927)
                .curve_to_relative(-0.553, 0.449, -0.539, 1.033, -0.329, 1.661)
                .curve_to_relative(0.21, 0.627, 0.668, 0.759, 1.246, 0.708)
                .curve_to_relative(0.055, -0.004, 0.112, 0.006, 0.165, 0.02)
                .curve_to_relative(0.544, 0.13, 1.23, 0.234, 1.327, 0.838)
                .curve_to(15.349, 15.66, 14.662, 15.857, 14.201, 16.043)
                .close()
                .move_to(21.948, 10.127)
                .horizontal_line_to_relative(-1.857)
                .curve_to_relative(-0.21, -0.907, -0.568, -1.754, -1.048, -2.521)
                .line_to_relative(1.317, -1.317)
                .curve_to_relative(0.334, -0.334, 0.334, -0.876, 0.0, -1.209)
                .line_to_relative(-1.437, -1.437)
                .curve_to_relative(-0.334, -0.334, -0.876, -0.334, -1.209, 0.0)
                .line_to(16.396, 4.96)
                .curve_to_relative(-0.767, -0.48, -1.615, -0.838, -2.521, -1.048)
                .vertical_line_to(2.054)
                .curve_to_relative(0.0, -0.473, -0.383, -0.855, -0.855, -0.855)
                .horizontal_line_to_relative(-2.033)
                .curve_to_relative(-0.473, 0.0, -0.855, 0.383, -0.855, 0.855)
                .vertical_line_to_relative(1.857)
                .curve_to_relative(-0.907, 0.21, -1.754, 0.568, -2.521, 1.048)
                .line_to_relative(-1.32, -1.317)
                .curve_to_relative(-0.334, -0.334, -0.876, -0.334, -1.209, 0.0)
                .line_to(3.644, 5.081)
                .curve_to_relative(-0.334, 0.334, -0.334, 0.876, 0.0, 1.209)
                .line_to(4.96, 7.607)
                .curve_to_relative(-0.48, 0.767, -0.838, 1.615, -1.048, 2.521)
                .horizontal_line_to(2.055)
                .curve_to_relative(-0.473, 0.0, -0.855, 0.383, -0.855, 0.855)
                .vertical_line_to_relative(2.033)
                .curve_to_relative(0.0, 0.473, 0.383, 0.855, 0.855, 0.855)
                .horizontal_line_to_relative(1.857)
                .curve_to_relative(0.21, 0.907, 0.568, 1.754, 1.048, 2.521)
                .line_to(3.644, 17.71)
                .curve_to_relative(-0.334, 0.334, -0.334, 0.876, 0.0, 1.209)
                .line_to_relative(1.437, 1.437)
                .curve_to_relative(0.334, 0.334, 0.876, 0.334, 1.209, 0.0)
                .line_to_relative(1.317, -1.317)
                .curve_to_relative(0.767, 0.48, 1.615, 0.838, 2.521, 1.048)
                .vertical_line_to_relative(1.859)
                .curve_to_relative(0.0, 0.473, 0.383, 0.855, 0.855, 0.855)
                .horizontal_line_to_relative(2.033)
                .curve_to_relative(0.473, 0.0, 0.855, -0.383, 0.855, -0.855)
                .vertical_line_to_relative(-1.857)
                .curve_to_relative(0.907, -0.21, 1.755, -0.568, 2.521, -1.048)
                .line_to_relative(1.317, 1.317)
                .curve_to_relative(0.334, 0.334, 0.876, 0.334, 1.209, 0.0)
                .line_to_relative(1.437, -1.437)
                .curve_to_relative(0.334, -0.334, 0.334, -0.876, 0.0, -1.209)
                .line_to_relative(-1.317, -1.317)
                .curve_to_relative(0.48, -0.767, 0.838, -1.615, 1.048, -2.521)
                .horizontal_line_to_relative(1.859)
                .curve_to_relative(0.473, 0.0, 0.855, -0.383, 0.855, -0.855)
                .vertical_line_to_relative(-2.033)
                .curve_to(22.804, 10.511, 22.421, 10.127, 21.948, 10.127)
                .close()
                .move_to(12.001, 18.911)
                .curve_to_relative(-3.811, 0.0, -6.911, -3.1, -6.911, -6.911)
                .reflective_curve_to_relative(3.1, -6.909, 6.911, -6.909)
                .reflective_curve_to(18.912, 8.189, 18.912, 12.0)
                .reflective_curve_to(15.812, 18.911, 12.001, 18.911)
                .close()
        })
        .build()
});

/// Icon for xDrip.
pub static IC_X_DRIP: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("IcXDrip", 48.0, 48.0, 24.0, 24.0)
        .description("Icon for xDrip.")
        .path(PathStyle::new().fill(Color::from_argb(0xFFB92929)), |p| {
            p.move_to(12.046, 1.2)
                .curve_to_relative(1.709, 1.721, 3.367, 3.401, 5.036, 5.069)
                .curve_to_relative(1.108, 1.108, 2.236, 2.184, 2.957, 3.622)
                .curve_to_relative(1.601, 3.192, 1.091, 7.127, -1.339, 9.92)
                .curve_to_relative(-2.272, 2.611, -6.202, 3.666, -9.472, 2.543)
                .curve_to(2.791, 20.143, 0.95, 12.334, 5.736, 7.479)
                .curve_to(7.786, 5.399, 9.875, 3.358, 12.046, 1.2)
                .close()
                .move_to(11.965, 4.442)
                .curve_to(10.344, 6.054, 8.812, 7.569, 7.29, 9.093)
                .curve_to_relative(-1.479, 1.481, -2.126, 3.275, -1.986, 5.359)
                .curve_to_relative(0.228, 3.373, 3.434, 6.299, 6.662, 6.041)
                .curve_to(11.965, 15.185, 11.965, 9.873, 11.965, 4.442)
                .close()
        })
        .build()
});

/// Icon for Man Back View.
pub static MAN_BACK: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("ManBack", 48.0, 128.0, 48.0, 128.0)
        .description("Icon for Man Back View.")
        .path(
            PathStyle::new()
                .named("background")
                .fill(Color::from_argb(0xFFEFC3AD))
                .stroke(Color::BLACK, 0.5669)
                .stroke_miter(10.0),
            |p| {
                p.move_to(42.701, 65.091)
                    .curve_to_relative(-0.053, -0.433, -0.128, -0.865, -0.13, -1.303)
                    .curve_to_relative(-0.009, -1.641, 0.1, -3.291, -0.041, -4.92)
                    .curve_to_relative(-0.239, -2.753, -0.099, -5.506, -0.207, -8.257)
                    .curve_to_relative(-0.028, -0.719, -0.219, -1.443, -0.416, -2.142)
                    .curve_to_relative(-0.658, -2.341, -0.995, -4.717, -0.897, -7.152)
                    .curve_to_relative(0.013, -0.329, -0.144, -5.933, -0.098, -8.458)
                    .curve_to_relative(0.02, -1.097, 0.117, -2.286, 0.017, -3.386)
                    .curve_to_relative(-0.092, -1.009, -0.271, -1.942, -0.577, -2.884)
                    .curve_to_relative(-0.701, -2.157, -2.057, -3.621, -4.276, -4.263)
                    .curve_to_relative(-2.207, -0.638, -4.4, -1.327, -6.599, -1.991)
                    .curve_to_relative(-1.732, -0.523, -2.537, -2.916, -1.435, -4.359)
                    .curve_to_relative(0.732, -0.959, 1.747, -2.816, 2.088, -4.258)
                    .curve_to_relative(0.749, -0.448, 0.91, -3.967, 0.124, -3.899)
                    .curve_to_relative(-0.175, -1.16, -0.068, -0.832, -0.238, -1.932)
                    .curve_to_relative(-0.369, -2.384, -1.645, -3.894, -3.934, -4.618)
                    .curve_to_relative(-2.685, -0.849, -5.713, 0.33, -6.916, 2.388)
                    .curve_to_relative(-0.691, 1.183, -0.771, 2.857, -0.874, 4.162)
                    .curve_to_relative(-0.789, -0.167, -0.429, 3.742, 0.371, 3.898)
                    .curve_to_relative(0.0, 1.473, 1.008, 3.245, 1.633, 4.245)
                    .curve_to_relative(1.03, 1.649, 0.815, 3.484, -1.402, 4.271)
                    .curve_to_relative(-1.546, 0.548, -3.147, 0.931, -4.706, 1.439)
                    .curve_to_relative(-1.175, 0.383, -2.421, 0.555, -3.526, 1.151)
                    .curve_to_relative(-1.411, 0.762, -2.284, 1.889, -2.818, 3.448)
                    .curve_to(6.79, 29.346, 7.398, 34.908, 7.06, 39.742)
                    .curve_to_relative(0.0, 2.215, -0.14, 6.207, -1.002, 9.004)
                    .curve_to_relative(-0.315, 1.022, -0.397, 2.075, -0.384, 3.145)
                    .curve_to_relative(0.022, 1.839, 0.062, 3.681, -0.025, 5.517)
                    .curve_to_relative(-0.059, 1.234, -0.099, 2.48, -0.338, 3.703)
                    .curve_to_relative(-0.035, 0.179, -0.084, 0.377, -0.042, 0.545)
                    .curve_to_relative(0.472, 1.872, -0.045, 3.699, -0.225, 5.542)
                    .curve_to_relative(-0.069, 0.708, 0.23, 1.361, 0.412, 2.028)
                    .curve_to_relative(0.533, 1.95, 1.797, 3.221, 3.654, 3.948)
                    .curve_to_relative(0.205, 0.08, 0.417, 0.244, 0.614, 0.085)
                    .curve_to_relative(0.231, -0.186, 0.169, -0.463, 0.078, -0.712)
                    .curve_to_relative(-0.143, -0.39, -0.358, -0.749, -0.742, -0.922)
                    .curve_to_relative(-0.579, -0.262, -0.834, -0.777, -0.875, -1.311)
                    .curve_to_relative(-0.059, -0.769, -0.464, -1.57, 0.067, -2.328)
                    .curve_to_relative(0.101, -0.144, 0.157, -0.362, 0.39, -0.312)
                    .curve_to_relative(0.195, 0.041, 0.305, 0.209, 0.339, 0.393)
                    .curve_to_relative(0.087, 0.466, 0.211, 0.936, 0.212, 1.404)
                    .curve_to_relative(0.0, 0.481, 0.205, 0.838, 0.452, 1.206)
                    .curve_to_relative(0.146, 0.218, 0.275, 0.484, 0.585, 0.367)
                    .curve_to_relative(0.273, -0.103, 0.328, -0.378, 0.313, -0.65)
                    .curve_to_relative(-0.088, -1.608, -0.162, -3.216, -0.282, -4.821)
                    .curve_to_relative(-0.023, -0.312, -0.17, -0.655, -0.363, -0.905)
                    .curve_to_relative(-0.677, -0.881, -0.793, -1.956, -1.061, -2.97)
                    .curve_to_relative(-0.152, -0.577, 0.154, -1.142, 0.319, -1.699)
                    .curve_to_relative(0.528, -1.784, 1.085, -3.56, 1.592, -5.35)
                    .curve_to_relative(0.568, -2.003, 0.902, -4.048, 1.157, -6.116)
                    .curve_to_relative(0.3, -2.429, 0.989, -7.291, 1.177, -7.291)
                    .curve_to_relative(0.209, 0.0, 0.996, 5.417, 0.996, 7.17)
                    .curve_to_relative(0.0, 3.766, -1.188, 9.446, -2.187, 12.783)
                    .curve_to_relative(-0.402, 1.342, -0.709, 4.559, -0.731, 6.805)
                    .curve_to_relative(-0.06, 6.221, 0.231, 11.741, 1.627, 17.012)
                    .curve_to_relative(0.664, 2.375, 0.31, 4.809, 0.434, 7.216)
                    .curve_to_relative(0.091, 1.779, -0.205, 3.504, -0.506, 5.234)
                    .curve_to_relative(-0.323, 1.861, -0.194, 3.715, -0.052, 5.582)
                    .curve_to_relative(0.12, 1.569, 0.37, 3.119, 0.517, 4.682)
                    .curve_to_relative(0.13, 1.383, 0.441, 2.733, 0.617, 4.107)
                    .curve_to_relative(0.133, 1.039, 0.37, 2.064, 0.542, 3.098)
                    .curve_to_relative(0.005, 0.03, 0.007, 0.059, 0.012, 0.089)
                    .curve_to_relative(0.19, 1.106, -0.306, 2.289, -1.394, 3.041)
                    .curve_to_relative(-1.142, 0.79, -2.314, 1.525, -3.672, 1.901)
                    .curve_to_relative(-0.316, 0.088, -0.643, 0.175, -0.927, 0.331)
                    .curve_to_relative(-0.252, 0.138, -0.49, 0.357, -0.442, 0.703)
                    .curve_to_relative(0.049, 0.353, 0.323, 0.42, 0.624, 0.512)
                    .curve_to_relative(0.754, 0.228, 1.531, 0.135, 2.29, 0.23)
                    .curve_to_relative(1.963, 0.245, 3.935, 0.336, 5.907, 0.397)
                    .curve_to_relative(1.333, 0.041, 1.899, -0.62, 1.986, -1.94)
                    .curve_to_relative(0.066, -1.005, -0.309, -1.96, -0.271, -2.951)
                    .curve_to_relative(0.03, -0.772, -0.047, -1.543, -0.045, -2.314)
                    .curve_to_relative(-0.077, -1.021, -0.008, -2.057, 0.188, -3.053)
                    .curve_to_relative(0.493, -2.502, 1.083, -4.99, 1.405, -7.518)
                    .curve_to_relative(0.267, -2.098, 0.329, -4.207, -0.122, -6.325)
                    .curve_to_relative(-0.361, -1.695, 0.162, -3.341, 0.777, -4.928)
                    .curve_to_relative(0.586, -1.512, 1.032, -3.04, 0.943, -4.695)
                    .curve_to_relative(-0.059, -1.101, -0.003, -2.208, -0.019, -3.312)
                    .curve_to_relative(-0.034, -2.317, 0.448, -4.577, 0.771, -6.853)
                    .curve_to_relative(0.287, -2.019, 0.665, -4.025, 1.007, -6.036)
                    .curve_to_relative(0.073, -0.432, 0.154, -0.863, 0.247, -1.29)
                    .curve_to_relative(0.04, -0.184, 0.153, -0.353, 0.345, -0.391)
                    .curve_to_relative(0.266, -0.053, 0.397, 0.153, 0.493, 0.352)
                    .curve_to_relative(0.111, 0.229, 0.204, 0.46, 0.235, 0.727)
                    .curve_to_relative(0.313, 2.643, 0.882, 5.246, 1.271, 7.876)
                    .curve_to_relative(0.354, 2.391, 0.673, 4.796, 0.496, 7.222)
                    .curve_to_relative(-0.174, 2.388, 0.191, 4.669, 1.107, 6.878)
                    .curve_to_relative(0.706, 1.702, 0.727, 3.44, 0.516, 5.276)
                    .curve_to_relative(-0.203, 1.767, -0.122, 3.577, 0.072, 5.38)
                    .curve_to_relative(0.286, 2.658, 1.05, 5.229, 1.334, 7.867)
                    .curve_to_relative(0.099, 0.922, 0.223, 1.875, 0.189, 2.821)
                    .curve_to_relative(-0.01, 0.202, 0.006, 0.379, 0.003, 0.57)
                    .curve_to_relative(-0.027, 1.524, -0.117, 3.051, -0.353, 4.577)
                    .curve_to_relative(-0.028, 0.179, -0.026, 0.372, 0.006, 0.551)
                    .curve_to_relative(0.116, 0.652, 0.401, 1.134, 1.106, 1.357)
                    .curve_to_relative(0.548, 0.173, 1.112, 0.265, 1.624, 0.131)
                    .curve_to_relative(0.914, -0.241, 1.826, -0.133, 2.737, -0.18)
                    .curve_to_relative(1.533, -0.08, 3.061, -0.206, 4.581, -0.429)
                    .curve_to_relative(0.352, -0.051, 0.701, -0.105, 0.721, -0.518)
                    .curve_to_relative(0.018, -0.378, -0.126, -0.747, -0.575, -0.809)
                    .curve_to_relative(-1.248, -0.172, -2.215, -0.948, -3.263, -1.53)
                    .curve_to_relative(-1.099, -0.611, -2.452, -1.347, -2.541, -2.78)
                    .curve_to_relative(-0.019, -0.313, -0.023, -0.557, 0.025, -0.938)
                    .horizontal_line_to_relative(0.001)
                    .curve_to_relative(0.511, -3.073, 1.009, -6.337, 1.481, -9.508)
                    .curve_to_relative(0.191, -1.284, 0.206, -2.63, 0.328, -3.936)
                    .curve_to_relative(0.215, -2.299, -0.223, -4.49, -0.662, -6.703)
                    .curve_to_relative(-0.092, -0.462, -0.049, -0.954, -0.051, -1.432)
                    .curve_to_relative(-0.005, -1.251, 0.047, -2.505, -0.012, -3.754)
                    .curve_to_relative(-0.073, -1.55, 0.118, -3.064, 0.437, -4.57)
                    .curve_to_relative(1.377, -6.52, 1.92, -14.084, 1.768, -18.086)
                    .curve_to_relative(-0.08, -2.104, -0.129, -3.604, -0.915, -6.243)
                    .curve_to_relative(-0.786, -2.639, -1.691, -6.474, -1.919, -9.296)
                    .curve_to_relative(-0.085, -1.058, -0.042, -2.126, -0.057, -3.19)
                    .curve_to_relative(0.045, -1.247, 0.825, -5.325, 0.936, -6.157)
                    .curve_to_relative(0.021, -0.161, 0.08, -0.431, 0.236, -0.49)
                    .curve_to_relative(0.119, 0.119, 0.13, 0.357, 0.138, 0.473)
                    .curve_to_relative(0.074, 1.064, 0.29, 1.763, 0.287, 2.684)
                    .curve_to_relative(-0.005, 2.055, 0.41, 4.065, 0.769, 6.075)
                    .curve_to_relative(0.59, 3.309, 1.551, 6.529, 2.42, 9.771)
                    .curve_to_relative(0.278, 1.039, 0.226, 2.112, -0.241, 3.12)
                    .curve_to_relative(-0.35, 0.755, -0.72, 1.5, -1.065, 2.257)
                    .curve_to_relative(-0.073, 0.16, -0.1, 0.352, -0.102, 0.529)
                    .curve_to_relative(-0.014, 1.288, -0.017, 2.576, -0.02, 3.864)
                    .curve_to_relative(0.0, 0.215, -0.031, 0.465, 0.255, 0.538)
                    .curve_to_relative(0.242, 0.061, 0.409, -0.096, 0.583, -0.238)
                    .curve_to_relative(0.575, -0.469, 0.538, -1.169, 0.68, -1.798)
                    .curve_to_relative(0.048, -0.21, 0.004, -0.44, 0.014, -0.661)
                    .curve_to_relative(0.013, -0.286, -0.027, -0.674, 0.375, -0.656)
                    .curve_to_relative(0.3, 0.014, 0.504, 0.33, 0.514, 0.639)
                    .curve_to_relative(0.043, 1.278, 0.243, 2.612, -1.056, 3.493)
                    .curve_to_relative(-0.18, 0.122, -0.333, 0.293, -0.47, 0.464)
                    .curve_to_relative(-0.169, 0.213, -0.542, 0.375, -0.333, 0.725)
                    .curve_to_relative(0.241, 0.403, 0.62, 0.312, 0.977, 0.158)
                    .curve_to_relative(1.95, -0.84, 3.128, -2.316, 3.754, -4.336)
                    .curve_to(43.168, 67.437, 42.846, 66.273, 42.701, 65.091)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::BackLeftUpperArm.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(12.175, 37.936)
                    .curve_to_relative(0.0, 1.801, -0.29, 2.754, -1.449, 2.754)
                    .curve_to_relative(-0.657, 0.0, -1.232, -0.123, -1.815, -0.168)
                    .curve_to_relative(-0.849, -0.066, -1.341, -0.564, -1.176, -2.307)
                    .curve_to_relative(0.203, -2.149, -0.038, -6.275, 0.102, -7.509)
                    .curve_to_relative(0.121, -1.067, 0.515, -1.41, 1.399, -1.41)
                    .curve_to_relative(0.68, 0.0, 0.986, 0.045, 2.034, 0.045)
                    .curve_to_relative(0.906, 0.0, 1.127, 0.762, 1.127, 2.046)
                    .curve_to(12.396, 32.589, 12.175, 36.698, 12.175, 37.936)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::BackRightUpperArm.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(35.825, 37.936)
                    .curve_to_relative(0.0, 1.801, 0.29, 2.754, 1.449, 2.754)
                    .curve_to_relative(0.657, 0.0, 1.232, -0.123, 1.815, -0.168)
                    .curve_to_relative(0.849, -0.066, 1.341, -0.564, 1.176, -2.307)
                    .curve_to_relative(-0.203, -2.149, 0.038, -6.275, -0.102, -7.509)
                    .curve_to_relative(-0.121, -1.067, -0.515, -1.41, -1.399, -1.41)
                    .curve_to_relative(-0.68, 0.0, -0.986, 0.045, -2.034, 0.045)
                    .curve_to_relative(-0.906, 0.0, -1.127, 0.762, -1.127, 2.046)
                    .curve_to(35.604, 32.589, 35.825, 36.698, 35.825, 37.936)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideLeftLowerThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(11.645, 78.96)
                    .curve_to_relative(0.252, 2.068, 0.62, 4.078, 1.143, 6.052)
                    .curve_to_relative(0.026, 0.092, 0.047, 0.184, 0.07, 0.276)
                    .curve_to_relative(0.634, -0.157, 1.154, -0.387, 1.147, -1.192)
                    .curve_to_relative(-0.014, -1.737, -0.02, -3.474, -0.021, -5.211)
                    .curve_to(13.219, 78.929, 12.437, 78.953, 11.645, 78.96)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideRightLowerThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(33.995, 84.096)
                    .curve_to_relative(-0.007, 0.83, 0.546, 1.049, 1.206, 1.207)
                    .curve_to_relative(0.018, -0.091, 0.036, -0.183, 0.055, -0.274)
                    .curve_to_relative(0.416, -1.971, 0.755, -4.036, 1.023, -6.07)
                    .curve_to_relative(-0.767, -0.01, -1.523, -0.035, -2.264, -0.079)
                    .curve_to(34.016, 80.619, 34.009, 82.358, 33.995, 84.096)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideLeftUpperThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(14.0, 73.748)
                    .curve_to_relative(0.004, -0.609, -0.309, -0.838, -0.894, -0.954)
                    .curve_to_relative(-0.633, -0.125, -1.27, -0.151, -1.91, -0.154)
                    .curve_to_relative(0.062, 2.179, 0.199, 4.278, 0.448, 6.32)
                    .curve_to_relative(0.793, -0.007, 1.574, -0.031, 2.339, -0.075)
                    .curve_to(13.984, 77.173, 13.989, 75.46, 14.0, 73.748)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideRightUpperThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(34.894, 72.794)
                    .curve_to_relative(-0.585, 0.116, -0.897, 0.344, -0.894, 0.954)
                    .curve_to_relative(0.01, 1.711, 0.016, 3.421, 0.016, 5.132)
                    .curve_to_relative(0.741, 0.044, 1.497, 0.069, 2.264, 0.079)
                    .curve_to_relative(0.289, -2.197, 0.494, -4.356, 0.62, -6.319)
                    .curve_to(36.228, 72.641, 35.559, 72.663, 34.894, 72.794)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::BackLeftButtock.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(12.842, 61.903)
                    .curve_to_relative(0.129, -1.13, 0.567, -3.081, 1.318, -4.021)
                    .curve_to_relative(1.152, -1.441, 1.591, -1.672, 5.308, -1.04)
                    .curve_to_relative(3.717, 0.632, 3.465, 3.887, 2.844, 7.627)
                    .curve_to_relative(-0.469, 2.826, -6.135, 3.293, -8.548, 1.317)
                    .curve_to(12.796, 64.994, 12.695, 63.268, 12.842, 61.903)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::BackRightButtock.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(35.158, 61.903)
                    .curve_to_relative(-0.129, -1.13, -0.567, -3.081, -1.318, -4.021)
                    .curve_to_relative(-1.152, -1.441, -1.591, -1.672, -5.308, -1.04)
                    .curve_to_relative(-3.717, 0.632, -3.465, 3.887, -2.844, 7.627)
                    .curve_to_relative(0.469, 2.826, 6.135, 3.293, 8.548, 1.317)
                    .curve_to(35.204, 64.994, 35.305, 63.268, 35.158, 61.903)
                    .close()
            },
        )
        .build()
});

/// Icon for Woman Back View.
pub static WOMAN_BACK: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("WomanBack", 48.0, 128.0, 48.0, 128.0)
        .description("Icon for Woman Back View.")
        .path(
            PathStyle::new()
                .named("background")
                .fill(Color::from_argb(0xFFEDC3AD))
                .stroke(Color::BLACK, 0.5669)
                .stroke_miter(10.0),
            |p| {
                p.move_to(42.13, 64.399)
                    .curve_to_relative(-0.959, -2.587, -1.369, -5.263, -1.454, -8.015)
                    .curve_to_relative(-0.104, -3.403, -0.421, -6.795, -0.485, -10.204)
                    .curve_to_relative(-0.025, -1.354, -0.389, -2.731, -0.89, -4.042)
                    .curve_to_relative(-0.742, -1.941, -0.889, -3.984, -0.855, -6.043)
                    .curve_to_relative(-0.097, -3.294, 0.016, -6.593, -0.227, -9.884)
                    .curve_to_relative(-0.136, -1.842, -1.362, -4.914, -4.076, -5.624)
                    .curve_to_relative(-1.69, -0.442, -3.426, -0.772, -5.0, -1.59)
                    .curve_to_relative(-0.163, -0.085, -0.325, -0.17, -0.489, -0.253)
                    .curve_to_relative(-0.4, -0.204, -0.906, -0.477, -0.875, -0.894)
                    .curve_to_relative(0.032, -0.421, 0.653, -0.335, 1.004, -0.436)
                    .curve_to_relative(2.605, -0.755, 4.41, -3.432, 3.861, -6.287)
                    .curve_to_relative(-0.444, -2.312, -1.038, -4.538, -2.098, -6.643)
                    .curve_to_relative(-0.614, -1.22, -1.583, -2.084, -2.659, -2.861)
                    .curve_to_relative(-0.059, -0.042, -0.129, -0.1, -0.193, -0.098)
                    .curve_to_relative(-2.101, 0.052, -4.149, -1.001, -6.286, -0.274)
                    .curve_to_relative(-2.2, 0.749, -3.698, 2.074, -4.15, 4.479)
                    .curve_to_relative(-0.363, 1.926, -0.469, 3.854, -0.386, 5.795)
                    .curve_to_relative(0.063, 1.48, -0.427, 2.601, -1.829, 3.174)
                    .curve_to_relative(-0.627, 0.256, -0.278, 0.469, -0.047, 0.683)
                    .curve_to_relative(1.179, 1.096, 2.595, 1.756, 4.128, 2.189)
                    .curve_to_relative(0.14, 0.039, 0.3, 0.018, 0.432, 0.07)
                    .curve_to_relative(0.197, 0.078, 0.466, 0.116, 0.521, 0.352)
                    .curve_to_relative(0.071, 0.306, -0.208, 0.465, -0.409, 0.592)
                    .curve_to_relative(-0.339, 0.214, -0.711, 0.384, -1.083, 0.537)
                    .curve_to_relative(-1.727, 0.709, -3.539, 1.141, -5.339, 1.608)
                    .curve_to_relative(-1.762, 0.457, -2.61, 1.563, -3.111, 3.287)
                    .curve_to_relative(-0.08, 0.274, -0.199, 0.839, -0.267, 1.159)
                    .curve_to_relative(-0.273, 1.703, -0.302, 3.414, -0.232, 5.135)
                    .curve_to_relative(0.04, 0.984, 0.037, 1.972, -0.104, 2.952)
                    .curve_to_relative(0.0, 0.604, -0.218, 4.189, -0.172, 4.877)
                    .curve_to_relative(0.089, 1.352, -0.299, 2.582, -0.699, 3.844)
                    .curve_to_relative(-0.46, 1.453, -0.796, 2.941, -0.887, 4.487)
                    .curve_to_relative(-0.129, 2.196, -0.128, 4.397, -0.252, 6.589)
                    .curve_to_relative(-0.116, 2.04, -0.141, 4.1, -0.437, 6.118)
                    .curve_to_relative(-0.214, 1.46, -0.399, 2.962, -1.043, 4.34)
                    .curve_to_relative(-0.541, 1.156, -0.583, 2.332, -0.294, 3.599)
                    .curve_to_relative(0.32, 1.398, 1.192, 2.21, 2.351, 2.857)
                    .curve_to_relative(0.325, 0.181, 0.597, 0.182, 0.925, 0.002)
                    .curve_to_relative(0.579, -0.318, 0.606, -0.451, 0.095, -0.93)
                    .curve_to_relative(-0.106, -0.099, -0.189, -0.239, -0.312, -0.302)
                    .curve_to_relative(-1.382, -0.698, -1.008, -1.958, -1.001, -3.099)
                    .curve_to_relative(0.001, -0.17, 0.114, -0.282, 0.275, -0.267)
                    .curve_to_relative(0.092, 0.009, 0.193, 0.104, 0.256, 0.187)
                    .curve_to_relative(0.143, 0.188, 0.105, 0.419, 0.115, 0.637)
                    .curve_to_relative(0.013, 0.293, -0.023, 0.599, 0.048, 0.877)
                    .curve_to_relative(0.067, 0.264, 0.138, 0.63, 0.52, 0.611)
                    .curve_to_relative(0.367, -0.018, 0.381, -0.395, 0.509, -0.644)
                    .curve_to_relative(0.016, -0.03, 0.014, -0.073, 0.012, -0.109)
                    .curve_to_relative(-0.104, -1.728, 0.647, -3.455, -0.144, -5.205)
                    .curve_to_relative(-0.346, -0.766, 0.071, -1.647, 0.299, -2.461)
                    .curve_to_relative(1.072, -3.826, 2.218, -7.636, 3.077, -11.515)
                    .curve_to_relative(0.456, -2.057, 0.695, -4.164, 1.018, -6.25)
                    .curve_to_relative(0.417, -2.688, 0.766, -8.242, 0.946, -8.242)
                    .curve_to_relative(0.515, 0.0, 0.672, 1.512, 0.792, 2.324)
                    .curve_to_relative(0.435, 2.96, 1.07, 8.067, -0.597, 11.768)
                    .curve_to_relative(-0.675, 1.498, -1.305, 3.445, -1.888, 5.581)
                    .curve_to_relative(-1.019, 3.739, -1.507, 7.836, -1.507, 11.694)
                    .curve_to_relative(0.0, 3.088, 0.782, 8.205, 2.223, 14.073)
                    .curve_to_relative(0.165, 0.673, 0.308, 1.351, 0.462, 2.027)
                    .curve_to_relative(0.287, 1.377, 0.194, 2.773, 0.179, 4.162)
                    .curve_to_relative(-0.007, 0.669, 0.138, 1.306, 0.233, 1.956)
                    .curve_to_relative(0.176, 1.204, -0.339, 2.304, -0.577, 3.441)
                    .curve_to_relative(-0.181, 0.865, -0.33, 1.718, -0.316, 2.607)
                    .curve_to_relative(0.035, 2.31, -0.077, 4.625, 0.245, 6.925)
                    .curve_to_relative(0.399, 2.853, 0.553, 5.735, 1.065, 8.574)
                    .curve_to_relative(0.139, 0.77, 0.218, 1.54, 0.235, 2.311)
                    .horizontal_line_to_relative(0.0)
                    .curve_to_relative(0.0, 0.645, 0.039, 1.293, 0.016, 1.943)
                    .curve_to_relative(-0.025, 0.681, -0.218, 1.309, -0.772, 1.619)
                    .curve_to_relative(-1.037, 0.582, -1.942, 1.417, -3.183, 1.645)
                    .curve_to_relative(-0.443, 0.082, -1.154, 0.193, -1.095, 0.852)
                    .curve_to_relative(0.061, 0.677, 0.813, 0.576, 1.231, 0.595)
                    .curve_to_relative(2.087, 0.093, 4.166, 0.389, 6.263, 0.281)
                    .curve_to_relative(1.078, -0.055, 1.466, -0.464, 1.523, -1.565)
                    .curve_to_relative(0.04, -0.781, -0.276, -1.505, -0.242, -2.29)
                    .curve_to_relative(0.045, -1.028, -0.067, -2.794, -0.12, -3.081)
                    .curve_to_relative(-0.004, -0.019, -0.007, -0.038, -0.01, -0.057)
                    .curve_to_relative(-0.197, -0.992, 0.061, -2.114, 0.283, -3.142)
                    .curve_to_relative(0.531, -2.464, 0.766, -4.972, 1.227, -7.443)
                    .curve_to_relative(0.255, -1.365, 0.342, -2.749, 0.598, -4.111)
                    .curve_to_relative(0.18, -0.958, -0.087, -1.911, -0.257, -2.831)
                    .curve_to_relative(-0.255, -1.382, -0.138, -2.677, 0.265, -3.998)
                    .curve_to_relative(0.534, -1.75, 0.97, -3.521, 0.922, -5.379)
                    .curve_to_relative(-0.013, -0.486, -0.116, -0.94, -0.218, -1.403)
                    .curve_to_relative(-0.377, -1.715, 0.028, -3.4, 0.152, -5.103)
                    .curve_to_relative(0.151, -2.08, 0.557, -4.122, 0.761, -6.194)
                    .curve_to_relative(0.222, -2.253, 0.464, -4.503, 0.607, -6.762)
                    .curve_to_relative(0.042, -0.658, 0.495, -0.494, 0.873, -0.524)
                    .curve_to_relative(0.431, -0.034, 0.686, 0.08, 0.686, 0.596)
                    .curve_to_relative(0.0, 2.774, 0.545, 6.074, 0.764, 8.507)
                    .curve_to_relative(0.145, 1.603, 0.785, 6.152, 0.803, 6.854)
                    .curve_to_relative(0.026, 1.033, -0.114, 2.042, -0.233, 3.061)
                    .curve_to_relative(-0.283, 2.42, 0.327, 4.722, 0.971, 7.02)
                    .curve_to_relative(0.296, 1.058, 0.438, 2.108, 0.145, 3.234)
                    .curve_to_relative(-0.438, 1.684, -0.331, 3.405, -0.026, 5.119)
                    .curve_to_relative(0.325, 1.829, 0.591, 3.668, 0.885, 5.503)
                    .curve_to_relative(0.358, 2.231, 0.755, 4.456, 1.059, 6.694)
                    .curve_to_relative(0.016, 0.12, 0.02, 0.24, 0.015, 0.359)
                    .curve_to_relative(-0.006, 0.055, -0.011, 0.11, -0.018, 0.165)
                    .curve_to_relative(-0.246, 1.799, -0.266, 3.591, -0.316, 5.386)
                    .curve_to_relative(-0.032, 1.139, 0.217, 1.327, 1.345, 1.386)
                    .curve_to_relative(2.06, 0.107, 4.101, -0.206, 6.153, -0.253)
                    .curve_to_relative(0.285, -0.006, 0.565, -0.148, 0.853, -0.191)
                    .curve_to_relative(0.291, -0.043, 0.483, -0.138, 0.48, -0.473)
                    .curve_to_relative(-0.003, -0.294, -0.135, -0.492, -0.398, -0.598)
                    .curve_to_relative(-0.204, -0.082, -0.412, -0.159, -0.626, -0.209)
                    .curve_to_relative(-1.168, -0.272, -2.116, -0.971, -3.075, -1.626)
                    .curve_to_relative(-0.409, -0.279, -0.686, -0.684, -0.815, -1.247)
                    .curve_to_relative(-0.182, -0.794, -0.134, -1.656, -0.123, -2.339)
                    .curve_to_relative(0.004, -0.102, 0.01, -0.204, 0.018, -0.306)
                    .curve_to_relative(0.123, -1.497, 0.39, -2.974, 0.59, -4.45)
                    .curve_to_relative(0.298, -2.205, 0.526, -4.423, 0.739, -6.629)
                    .curve_to_relative(0.308, -3.192, 0.68, -6.426, -0.195, -9.613)
                    .curve_to_relative(-0.193, -0.702, -0.326, -1.421, -0.508, -2.126)
                    .curve_to_relative(-0.066, -0.257, -0.102, -0.505, -0.02, -0.757)
                    .curve_to_relative(0.636, -1.939, 0.298, -3.932, 0.328, -5.904)
                    .curve_to_relative(0.653, -1.787, 0.917, -3.67, 1.327, -5.514)
                    .curve_to_relative(0.883, -3.979, 1.475, -9.335, 1.331, -13.876)
                    .curve_to_relative(-0.087, -2.764, -0.478, -5.52, -1.219, -8.202)
                    .curve_to_relative(-0.1, -0.361, -1.346, -4.749, -2.048, -6.048)
                    .curve_to_relative(-1.943, -3.598, -0.922, -10.472, -0.465, -12.43)
                    .curve_to_relative(0.058, -0.249, 0.088, -0.476, 0.183, -0.723)
                    .curve_to_relative(0.083, -0.215, 0.291, -0.742, 0.5, -0.715)
                    .curve_to_relative(0.136, 0.017, 0.191, 0.631, 0.211, 0.85)
                    .curve_to_relative(0.201, 2.216, 0.591, 4.411, 0.689, 6.641)
                    .curve_to_relative(0.12, 2.739, 0.554, 5.449, 1.356, 8.065)
                    .curve_to_relative(1.07, 3.489, 1.926, 7.033, 2.915, 10.542)
                    .curve_to_relative(0.295, 1.045, 0.395, 2.054, -0.094, 3.074)
                    .curve_to_relative(-0.314, 0.654, -0.328, 1.341, -0.038, 2.026)
                    .curve_to_relative(0.233, 0.551, 0.267, 1.134, 0.245, 1.726)
                    .curve_to_relative(-0.012, 0.328, 0.002, 0.663, 0.059, 0.985)
                    .curve_to_relative(0.04, 0.229, 0.229, 0.376, 0.48, 0.375)
                    .curve_to_relative(0.3, -0.002, 0.336, -0.226, 0.353, -0.456)
                    .curve_to_relative(0.037, -0.509, -0.041, -1.029, 0.186, -1.519)
                    .curve_to_relative(0.076, -0.163, 0.081, -0.387, 0.326, -0.352)
                    .curve_to_relative(0.198, 0.028, 0.289, 0.208, 0.341, 0.389)
                    .curve_to_relative(0.325, 1.12, -0.104, 2.262, -1.08, 2.992)
                    .curve_to_relative(-0.326, 0.244, -0.934, 0.506, -0.559, 0.992)
                    .curve_to_relative(0.277, 0.359, 0.818, 0.51, 1.386, 0.224)
                    .curve_to(42.028, 68.931, 42.953, 66.618, 42.13, 64.399)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideLeftLowerThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(14.795, 77.708)
                    .curve_to_relative(-0.015, -1.737, -0.289, -3.474, -0.289, -5.211)
                    .curve_to_relative(-0.678, 0.036, -1.37, 0.056, -2.069, 0.067)
                    .curve_to_relative(0.346, 1.9, 0.788, 3.966, 1.321, 6.136)
                    .curve_to_relative(0.005, 0.021, 0.009, 0.042, 0.015, 0.062)
                    .curve_to(14.218, 78.594, 14.8, 78.314, 14.795, 77.708)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideLeftUpperThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(14.522, 67.359)
                    .curve_to_relative(0.004, -0.609, -0.331, -0.838, -0.959, -0.954)
                    .curve_to_relative(-0.653, -0.12, -1.309, -0.148, -1.968, -0.152)
                    .curve_to_relative(0.116, 1.744, 0.399, 3.889, 0.841, 6.31)
                    .curve_to_relative(0.699, -0.011, 1.391, -0.031, 2.069, -0.067)
                    .curve_to(14.505, 70.784, 14.511, 69.072, 14.522, 67.359)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideRightLowerThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(33.084, 77.708)
                    .curve_to_relative(-0.051, 0.679, 0.579, 0.95, 1.113, 1.112)
                    .curve_to_relative(0.267, -1.133, 0.464, -2.282, 0.716, -3.417)
                    .curve_to_relative(0.196, -0.885, 0.377, -1.841, 0.54, -2.838)
                    .curve_to_relative(-0.731, -0.01, -1.454, -0.031, -2.162, -0.069)
                    .curve_to(33.292, 74.234, 33.206, 76.078, 33.084, 77.708)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideRightUpperThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(33.275, 67.359)
                    .curve_to_relative(0.011, 1.712, 0.017, 3.425, 0.017, 5.137)
                    .curve_to_relative(0.708, 0.038, 1.431, 0.058, 2.162, 0.069)
                    .curve_to_relative(0.325, -1.993, 0.573, -4.159, 0.705, -6.312)
                    .curve_to_relative(-0.644, 0.006, -1.286, 0.034, -1.925, 0.152)
                    .curve_to(33.607, 66.521, 33.271, 66.75, 33.275, 67.359)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::BackLeftButtock.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(12.842, 57.285)
                    .curve_to_relative(0.129, -1.13, 0.567, -3.081, 1.318, -4.021)
                    .curve_to_relative(1.152, -1.441, 1.591, -1.672, 5.308, -1.04)
                    .curve_to_relative(3.716, 0.633, 3.465, 3.887, 2.844, 7.627)
                    .curve_to_relative(-0.469, 2.826, -6.135, 3.293, -8.548, 1.317)
                    .curve_to(12.796, 60.376, 12.695, 58.651, 12.842, 57.285)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::BackRightButtock.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(35.158, 57.285)
                    .curve_to_relative(-0.129, -1.13, -0.567, -3.081, -1.318, -4.021)
                    .curve_to_relative(-1.152, -1.441, -1.591, -1.672, -5.308, -1.04)
                    .curve_to_relative(-3.716, 0.633, -3.465, 3.887, -2.844, 7.627)
                    .curve_to_relative(0.469, 2.826, 6.135, 3.293, 8.548, 1.317)
                    .curve_to(35.204, 60.376, 35.305, 58.651, 35.158, 57.285)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::BackLeftUpperArm.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(13.627, 34.526)
                    .curve_to_relative(-0.087, 1.846, -0.497, 2.63, -0.975, 2.615)
                    .curve_to_relative(-0.563, -0.017, -1.055, -0.117, -1.554, -0.16)
                    .curve_to_relative(-0.727, -0.063, -1.246, -0.364, -1.09, -2.108)
                    .curve_to_relative(0.26, -2.92, 0.131, -6.123, 0.251, -7.295)
                    .curve_to_relative(0.103, -1.014, 0.361, -1.259, 1.117, -1.259)
                    .curve_to_relative(0.582, 0.0, 0.844, 0.043, 1.741, 0.043)
                    .curve_to_relative(0.776, 0.0, 1.113, 1.052, 0.989, 2.265)
                    .curve_to(13.975, 29.901, 13.722, 32.5, 13.627, 34.526)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::BackRightUpperArm.as_str())
                .fill(Color::from_argb(0xFFEE694C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(34.373, 34.526)
                    .curve_to_relative(0.087, 1.846, 0.497, 2.63, 0.975, 2.615)
                    .curve_to_relative(0.563, -0.017, 1.055, -0.117, 1.554, -0.16)
                    .curve_to_relative(0.727, -0.063, 1.246, -0.364, 1.09, -2.108)
                    .curve_to_relative(-0.26, -2.92, -0.131, -6.123, -0.251, -7.295)
                    .curve_to_relative(-0.103, -1.014, -0.361, -1.259, -1.117, -1.259)
                    .curve_to_relative(-0.582, 0.0, -0.844, 0.043, -1.741, 0.043)
                    .curve_to_relative(-0.776, 0.0, -1.113, 1.052, -0.989, 2.265)
                    .curve_to(34.025, 29.901, 34.278, 32.5, 34.373, 34.526)
                    .close()
            },
        )
        .build()
});

/// Icon for Woman Front View.
pub static WOMAN_FRONT: LazyLock<IconDefinition> = LazyLock::new(|| {
    IconDefinition::builder("WomanFront", 48.0, 128.0, 48.0, 128.0)
        .description("Icon for Woman Front View.")
        .path(
            PathStyle::new()
                .named("background")
                .fill(Color::from_argb(0xFFEFC3AD))
                .stroke(Color::BLACK, 0.5669)
                .stroke_miter(10.0),
            |p| {
                p.move_to(41.958, 63.514)
                    .curve_to_relative(-0.645, -1.377, -0.83, -2.879, -1.043, -4.34)
                    .curve_to_relative(-0.295, -2.018, -0.321, -4.077, -0.437, -6.118)
                    .curve_to_relative(-0.125, -2.192, -0.123, -4.392, -0.252, -6.589)
                    .curve_to_relative(-0.091, -1.547, -0.427, -3.034, -0.887, -4.487)
                    .curve_to_relative(-0.399, -1.262, -0.788, -2.492, -0.699, -3.844)
                    .curve_to_relative(0.045, -0.688, -0.172, -4.273, -0.172, -4.877)
                    .curve_to_relative(-0.141, -0.98, -0.144, -1.969, -0.104, -2.952)
                    .curve_to_relative(0.07, -1.72, 0.041, -3.432, -0.232, -5.135)
                    .curve_to_relative(-0.068, -0.319, -0.188, -0.884, -0.267, -1.159)
                    .curve_to_relative(-0.501, -1.724, -1.349, -2.831, -3.111, -3.287)
                    .curve_to_relative(-1.8, -0.467, -3.612, -0.899, -5.339, -1.608)
                    .curve_to_relative(-0.373, -0.153, -0.744, -0.323, -1.083, -0.537)
                    .curve_to_relative(-0.201, -0.126, -0.48, -0.285, -0.409, -0.592)
                    .curve_to_relative(0.055, -0.236, 0.324, -0.274, 0.521, -0.352)
                    .curve_to_relative(0.133, -0.052, 0.293, -0.031, 0.432, -0.07)
                    .curve_to_relative(1.533, -0.433, 2.949, -1.093, 4.128, -2.189)
                    .curve_to_relative(0.231, -0.215, 0.58, -0.427, -0.047, -0.683)
                    .curve_to_relative(-1.402, -0.573, -1.893, -1.694, -1.829, -3.174)
                    .curve_to_relative(0.083, -1.941, -0.023, -3.869, -0.386, -5.795)
                    .curve_to_relative(-0.453, -2.405, -1.951, -3.73, -4.15, -4.479)
                    .curve_to_relative(-2.138, -0.728, -4.185, 0.326, -6.286, 0.274)
                    .curve_to_relative(-0.064, -0.002, -0.135, 0.056, -0.193, 0.098)
                    .curve_to_relative(-1.076, 0.777, -2.045, 1.64, -2.659, 2.861)
                    .curve_to_relative(-1.06, 2.105, -1.654, 4.332, -2.098, 6.643)
                    .curve_to_relative(-0.548, 2.855, 1.257, 5.532, 3.861, 6.287)
                    .curve_to_relative(0.351, 0.102, 0.973, 0.015, 1.004, 0.436)
                    .curve_to_relative(0.031, 0.417, -0.475, 0.69, -0.875, 0.894)
                    .curve_to_relative(-0.164, 0.083, -0.326, 0.169, -0.489, 0.253)
                    .curve_to_relative(-1.574, 0.818, -3.311, 1.148, -5.0, 1.59)
                    .curve_to_relative(-2.714, 0.71, -3.94, 3.782, -4.076, 5.624)
                    .curve_to_relative(-0.242, 3.291, -0.13, 6.59, -0.227, 9.884)
                    .curve_to_relative(0.034, 2.06, -0.113, 4.102, -0.855, 6.043)
                    .curve_to_relative(-0.501, 1.31, -0.865, 2.688, -0.89, 4.042)
                    .curve_to_relative(-0.064, 3.409, -0.381, 6.801, -0.485, 10.204)
                    .curve_to_relative(-0.084, 2.753, -0.495, 5.428, -1.454, 8.015)
                    .curve_to_relative(-0.823, 2.22, 0.102, 4.533, 2.158, 5.566)
                    .curve_to(8.596, 70.25, 9.136, 70.1, 9.414, 69.74)
                    .curve_to_relative(0.375, -0.486, -0.233, -0.748, -0.559, -0.992)
                    .curve_to_relative(-0.976, -0.73, -1.405, -1.872, -1.08, -2.992)
                    .curve_to_relative(0.053, -0.181, 0.143, -0.36, 0.341, -0.389)
                    .curve_to_relative(0.245, -0.035, 0.25, 0.189, 0.326, 0.352)
                    .curve_to_relative(0.227, 0.49, 0.149, 1.01, 0.186, 1.519)
                    .curve_to_relative(0.017, 0.229, 0.053, 0.454, 0.353, 0.456)
                    .curve_to_relative(0.251, 0.001, 0.44, -0.146, 0.48, -0.375)
                    .curve_to_relative(0.057, -0.322, 0.07, -0.657, 0.059, -0.985)
                    .curve_to_relative(-0.022, -0.593, 0.012, -1.175, 0.245, -1.726)
                    .curve_to_relative(0.29, -0.684, 0.276, -1.371, -0.038, -2.026)
                    .curve_to_relative(-0.489, -1.021, -0.389, -2.029, -0.094, -3.074)
                    .curve_to_relative(0.989, -3.509, 1.845, -7.053, 2.915, -10.542)
                    .curve_to_relative(0.802, -2.616, 1.237, -5.325, 1.356, -8.065)
                    .curve_to_relative(0.098, -2.23, 0.488, -4.425, 0.689, -6.641)
                    .curve_to_relative(0.02, -0.219, 0.075, -0.833, 0.211, -0.85)
                    .curve_to_relative(0.209, -0.026, 0.418, 0.5, 0.5, 0.715)
                    .curve_to_relative(0.095, 0.248, 0.125, 0.474, 0.183, 0.723)
                    .curve_to_relative(0.457, 1.957, 1.478, 8.831, -0.465, 12.43)
                    .curve_to_relative(-0.702, 1.299, -1.948, 5.687, -2.048, 6.048)
                    .curve_to_relative(-0.741, 2.681, -1.132, 5.438, -1.219, 8.202)
                    .curve_to_relative(-0.144, 4.541, 0.448, 9.897, 1.331, 13.876)
                    .curve_to_relative(0.409, 1.844, 0.674, 3.727, 1.327, 5.514)
                    .curve_to_relative(0.03, 1.972, -0.308, 3.965, 0.328, 5.904)
                    .curve_to_relative(0.083, 0.252, 0.047, 0.499, -0.02, 0.757)
                    .curve_to_relative(-0.182, 0.706, -0.315, 1.424, -0.508, 2.126)
                    .curve_to_relative(-0.875, 3.187, -0.503, 6.421, -0.195, 9.613)
                    .curve_to_relative(0.213, 2.206, 0.441, 4.424, 0.739, 6.629)
                    .curve_to_relative(0.2, 1.477, 0.467, 2.953, 0.59, 4.45)
                    .curve_to_relative(0.134, 1.626, -0.316, 3.084, -0.755, 4.576)
                    .curve_to_relative(-0.048, 0.164, -0.196, 0.311, -0.325, 0.437)
                    .curve_to_relative(-0.814, 0.793, -1.529, 1.683, -2.48, 2.341)
                    .curve_to_relative(-0.84, 0.582, -0.713, 1.475, 0.22, 1.866)
                    .curve_to_relative(0.47, 0.198, 0.969, 0.332, 1.428, 0.55)
                    .curve_to_relative(1.056, 0.502, 1.705, 0.375, 2.596, -0.306)
                    .curve_to_relative(1.035, -0.791, 1.873, -1.839, 3.089, -2.39)
                    .curve_to_relative(0.429, -0.194, 0.566, -0.51, 0.568, -0.966)
                    .curve_to_relative(0.005, -1.213, -0.29, -2.391, -0.383, -3.591)
                    .curve_to_relative(-0.068, -0.876, -0.582, -1.697, -0.463, -2.57)
                    .curve_to_relative(0.304, -2.238, 0.701, -4.463, 1.059, -6.694)
                    .curve_to_relative(0.294, -1.834, 0.56, -3.674, 0.885, -5.503)
                    .curve_to_relative(0.304, -1.714, 0.412, -3.435, -0.026, -5.119)
                    .curve_to_relative(-0.293, -1.126, -0.152, -2.176, 0.145, -3.234)
                    .curve_to_relative(0.644, -2.299, 1.254, -4.601, 0.971, -7.02)
                    .curve_to_relative(-0.119, -1.019, -0.259, -2.028, -0.233, -3.061)
                    .curve_to_relative(0.018, -0.702, 0.658, -5.251, 0.803, -6.854)
                    .curve_to_relative(0.22, -2.432, 0.764, -5.733, 0.764, -8.507)
                    .curve_to_relative(0.0, -0.516, 0.255, -0.629, 0.686, -0.596)
                    .curve_to_relative(0.377, 0.029, 0.831, -0.135, 0.873, 0.524)
                    .curve_to_relative(0.143, 2.259, 0.384, 4.51, 0.607, 6.762)
                    .curve_to_relative(0.204, 2.072, 0.61, 4.114, 0.761, 6.194)
                    .curve_to_relative(0.124, 1.702, 0.529, 3.388, 0.152, 5.103)
                    .curve_to_relative(-0.102, 0.463, -0.205, 0.918, -0.218, 1.403)
                    .curve_to_relative(-0.048, 1.858, 0.388, 3.629, 0.922, 5.379)
                    .curve_to_relative(0.403, 1.321, 0.52, 2.616, 0.265, 3.998)
                    .curve_to_relative(-0.169, 0.92, -0.437, 1.873, -0.257, 2.831)
                    .curve_to_relative(0.256, 1.363, 0.343, 2.746, 0.598, 4.111)
                    .curve_to_relative(0.461, 2.471, 0.696, 4.979, 1.227, 7.443)
                    .curve_to_relative(0.221, 1.028, 0.48, 2.15, 0.283, 3.142)
                    .curve_to_relative(-0.334, 1.684, -0.252, 3.421, -0.778, 5.078)
                    .curve_to_relative(-0.271, 0.855, 0.018, 1.564, 0.777, 1.845)
                    .curve_to_relative(1.086, 0.402, 1.645, 1.39, 2.531, 2.002)
                    .curve_to_relative(0.422, 0.291, 0.822, 0.604, 1.287, 0.826)
                    .curve_to_relative(0.352, 0.168, 0.745, 0.192, 1.079, 0.081)
                    .curve_to_relative(0.795, -0.265, 1.58, -0.574, 2.336, -0.936)
                    .curve_to_relative(0.7, -0.336, 0.742, -1.046, 0.136, -1.566)
                    .curve_to_relative(-0.36, -0.309, -0.752, -0.597, -1.093, -0.912)
                    .curve_to_relative(-1.098, -1.016, -2.148, -2.075, -2.449, -3.661)
                    .curve_to_relative(-0.318, -1.681, -0.284, -3.345, 0.017, -5.012)
                    .curve_to_relative(0.513, -2.839, 0.666, -5.722, 1.065, -8.574)
                    .curve_to_relative(0.322, -2.3, 0.21, -4.615, 0.245, -6.925)
                    .curve_to_relative(0.014, -0.889, -0.135, -1.742, -0.316, -2.607)
                    .curve_to_relative(-0.239, -1.138, -0.753, -2.237, -0.577, -3.441)
                    .curve_to_relative(0.095, -0.65, 0.24, -1.288, 0.233, -1.956)
                    .curve_to_relative(-0.015, -1.389, -0.108, -2.785, 0.179, -4.162)
                    .curve_to_relative(0.154, -0.676, 0.296, -1.354, 0.462, -2.027)
                    .curve_to_relative(1.44, -5.869, 2.223, -10.985, 2.223, -14.073)
                    .curve_to_relative(0.0, -3.857, -0.488, -7.955, -1.507, -11.694)
                    .curve_to_relative(-0.582, -2.137, -1.213, -4.083, -1.888, -5.581)
                    .curve_to_relative(-1.667, -3.701, -1.032, -8.808, -0.597, -11.768)
                    .curve_to_relative(0.119, -0.812, 0.276, -2.324, 0.792, -2.324)
                    .curve_to_relative(0.179, 0.0, 0.529, 5.554, 0.946, 8.242)
                    .curve_to_relative(0.323, 2.086, 0.563, 4.193, 1.018, 6.25)
                    .curve_to_relative(0.859, 3.88, 2.005, 7.689, 3.077, 11.515)
                    .curve_to_relative(0.228, 0.814, 0.645, 1.695, 0.299, 2.461)
                    .curve_to_relative(-0.791, 1.75, -0.04, 3.477, -0.144, 5.205)
                    .curve_to_relative(-0.002, 0.036, -0.004, 0.078, 0.012, 0.109)
                    .curve_to_relative(0.128, 0.25, 0.142, 0.626, 0.509, 0.644)
                    .curve_to_relative(0.382, 0.019, 0.452, -0.347, 0.52, -0.611)
                    .curve_to_relative(0.071, -0.278, 0.035, -0.583, 0.048, -0.877)
                    .curve_to_relative(0.009, -0.218, -0.028, -0.45, 0.115, -0.637)
                    .curve_to_relative(0.063, -0.083, 0.164, -0.178, 0.256, -0.187)
                    .curve_to_relative(0.16, -0.016, 0.274, 0.097, 0.275, 0.267)
                    .curve_to_relative(0.006, 1.141, 0.381, 2.401, -1.001, 3.099)
                    .curve_to_relative(-0.123, 0.062, -0.206, 0.202, -0.312, 0.302)
                    .curve_to_relative(-0.51, 0.479, -0.484, 0.612, 0.095, 0.93)
                    .curve_to_relative(0.328, 0.18, 0.6, 0.179, 0.925, -0.002)
                    .curve_to_relative(1.16, -0.647, 2.032, -1.459, 2.351, -2.857)
                    .curve_to(42.541, 65.847, 42.499, 64.671, 41.958, 63.514)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontRightLowerThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(15.062, 78.416)
                    .curve_to_relative(0.207, 0.31, 1.338, 0.342, 1.863, 0.34)
                    .curve_to_relative(2.298, -0.007, 3.185, -0.483, 3.206, -1.896)
                    .curve_to_relative(0.019, -1.294, 0.159, -2.904, 0.311, -4.468)
                    .curve_to_relative(-2.323, -0.042, -4.624, -0.116, -6.9, -0.22)
                    .curve_to(14.004, 74.992, 14.668, 77.827, 15.062, 78.416)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontRightUpperThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(17.971, 65.481)
                    .curve_to_relative(-1.386, -0.1, -3.983, -0.288, -4.726, 0.521)
                    .curve_to_relative(-0.434, 0.473, -0.172, 3.314, 0.296, 6.171)
                    .curve_to_relative(2.276, 0.105, 4.577, 0.179, 6.9, 0.22)
                    .curve_to_relative(0.172, -1.775, 0.36, -3.491, 0.404, -4.618)
                    .curve_to(20.909, 66.147, 20.333, 65.651, 17.971, 65.481)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontLeftLowerThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(27.869, 76.861)
                    .curve_to_relative(0.021, 1.412, 0.907, 1.888, 3.206, 1.896)
                    .curve_to_relative(0.525, 0.002, 1.655, -0.031, 1.863, -0.34)
                    .curve_to_relative(0.395, -0.59, 1.058, -3.424, 1.521, -6.244)
                    .curve_to_relative(-2.276, 0.105, -4.577, 0.179, -6.9, 0.22)
                    .curve_to(27.71, 73.957, 27.85, 75.567, 27.869, 76.861)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontLeftUpperThigh.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(34.755, 66.002)
                    .curve_to_relative(-0.742, -0.81, -3.339, -0.621, -4.726, -0.521)
                    .curve_to_relative(-2.362, 0.17, -2.938, 0.666, -2.875, 2.294)
                    .curve_to_relative(0.044, 1.127, 0.231, 2.843, 0.404, 4.618)
                    .curve_to_relative(2.323, -0.042, 4.624, -0.116, 6.9, -0.22)
                    .curve_to(34.927, 69.316, 35.189, 66.475, 34.755, 66.002)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideRightUpperArm.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(11.368, 35.504)
                    .curve_to_relative(0.0, -2.724, 0.054, -5.132, -0.038, -7.813)
                    .curve_to_relative(-0.035, -1.02, -0.188, -1.302, -1.556, -1.371)
                    .curve_to_relative(-0.232, 3.254, -0.124, 6.516, -0.22, 9.774)
                    .curve_to_relative(0.006, 0.352, 0.006, 0.703, -0.001, 1.054)
                    .curve_to(11.012, 37.071, 11.368, 36.691, 11.368, 35.504)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideLeftUpperArm.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(36.67, 27.691)
                    .curve_to_relative(-0.092, 2.681, -0.038, 5.089, -0.038, 7.813)
                    .curve_to_relative(0.0, 1.236, 0.385, 1.598, 2.0, 1.652)
                    .curve_to_relative(-0.042, -1.328, -0.164, -3.444, -0.164, -3.895)
                    .curve_to_relative(-0.141, -0.98, -0.144, -1.969, -0.104, -2.952)
                    .curve_to_relative(0.054, -1.336, 0.047, -2.666, -0.086, -3.991)
                    .curve_to(36.86, 26.382, 36.706, 26.658, 36.67, 27.691)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontRightLowerAbdomen.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(24.0, 49.407)
                    .curve_to_relative(-1.201, 0.0, -2.176, -0.959, -2.206, -2.153)
                    .curve_to_relative(-1.442, -0.029, -2.859, -0.088, -4.254, -0.172)
                    .curve_to_relative(-0.299, 1.957, -0.7, 3.82, -1.189, 5.561)
                    .curve_to_relative(2.412, 0.201, 4.98, 0.312, 7.648, 0.312)
                    .vertical_line_to(49.407)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideRightLowerAbdomen.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(15.2, 46.92)
                    .curve_to_relative(-0.057, 0.122, -0.116, 0.241, -0.178, 0.357)
                    .curve_to_relative(-0.517, 0.957, -1.328, 3.586, -1.76, 5.052)
                    .curve_to_relative(0.995, 0.123, 2.029, 0.227, 3.091, 0.315)
                    .curve_to_relative(0.489, -1.741, 0.889, -3.604, 1.189, -5.561)
                    .curve_to(16.753, 47.036, 15.971, 46.983, 15.2, 46.92)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontRightUpperAbdomen.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(18.149, 40.064)
                    .curve_to_relative(-0.058, 2.436, -0.268, 4.788, -0.609, 7.019)
                    .curve_to_relative(1.395, 0.083, 2.812, 0.143, 4.254, 0.172)
                    .curve_to_relative(0.0, -0.019, -0.003, -0.037, -0.003, -0.055)
                    .curve_to_relative(0.0, -1.22, 0.989, -2.209, 2.209, -2.209)
                    .vertical_line_to_relative(-5.105)
                    .curve_to(21.985, 39.885, 20.027, 39.947, 18.149, 40.064)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideRightUpperAbdomen.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(16.146, 40.211)
                    .curve_to_relative(0.086, 2.323, -0.095, 4.868, -0.945, 6.708)
                    .curve_to_relative(0.77, 0.064, 1.553, 0.116, 2.34, 0.163)
                    .curve_to_relative(0.341, -2.23, 0.55, -4.583, 0.609, -7.019)
                    .curve_to(17.471, 40.106, 16.802, 40.155, 16.146, 40.211)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontLeftLowerAbdomen.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(26.206, 47.254)
                    .curve_to_relative(-0.03, 1.194, -1.005, 2.153, -2.206, 2.153)
                    .vertical_line_to_relative(3.548)
                    .curve_to_relative(2.668, 0.0, 5.236, -0.111, 7.648, -0.312)
                    .curve_to_relative(-0.489, -1.741, -0.889, -3.604, -1.189, -5.561)
                    .curve_to(29.065, 47.165, 27.648, 47.225, 26.206, 47.254)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideLeftLowerAbdomen.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(33.07, 47.352)
                    .curve_to_relative(-0.065, -0.144, -0.126, -0.291, -0.184, -0.44)
                    .curve_to_relative(-0.799, 0.067, -1.61, 0.121, -2.427, 0.17)
                    .curve_to_relative(0.299, 1.958, 0.7, 3.82, 1.189, 5.561)
                    .curve_to_relative(1.079, -0.09, 2.13, -0.196, 3.14, -0.321)
                    .curve_to(34.253, 50.427, 33.68, 48.706, 33.07, 47.352)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::FrontLeftUpperAbdomen.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(24.0, 39.885)
                    .vertical_line_to_relative(5.105)
                    .curve_to_relative(1.22, 0.0, 2.209, 0.989, 2.209, 2.209)
                    .curve_to_relative(0.0, 0.019, -0.002, 0.037, -0.003, 0.055)
                    .curve_to_relative(1.442, -0.029, 2.859, -0.089, 4.254, -0.172)
                    .curve_to_relative(-0.341, -2.23, -0.55, -4.582, -0.609, -7.018)
                    .curve_to(27.973, 39.947, 26.015, 39.885, 24.0, 39.885)
                    .close()
            },
        )
        .path(
            PathStyle::new()
                .named(BodyZone::SideLeftUpperAbdomen.as_str())
                .fill(Color::from_argb(0xFFEF6A4C))
                .stroke(Color::BLACK, 0.2835)
                .stroke_miter(10.0),
            |p| {
                p.move_to(32.004, 40.224)
                    .curve_to_relative(-0.704, -0.062, -1.423, -0.114, -2.153, -0.16)
                    .curve_to_relative(0.058, 2.436, 0.268, 4.788, 0.609, 7.018)
                    .curve_to_relative(0.817, -0.049, 1.628, -0.103, 2.427, -0.17)
                    .curve_to(32.084, 44.865, 31.92, 42.452, 32.004, 40.224)
                    .close()
            },
        )
        .build()
});
