use approx::assert_relative_eq;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use quadviz::configuration::{
    Configuration,
    ConfigurationError
};
use quadviz::math::quadrature::rectanglerule::{
    RectangleMethod,
    rectangle_estimate
};
use quadviz::math::quadrature::simpsonrule::simpson_estimate;
use quadviz::plot::plotconfig::PlotConfig;
use quadviz::plot::plotrenderer::PlotRenderer;
use quadviz::{
    Integrator,
    QuadratureError,
    rectangle_rule,
    simpson_rule
};

const METHODS: [&str; 3] = ["left", "right", "midpoint"];

fn small_integrator() -> Integrator {
    Integrator::new(PlotRenderer::new(PlotConfig::default().with_size(240, 180)))
}

fn assert_png(payload: &str) {
    let bytes = STANDARD.decode(payload).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
    let image = image::load_from_memory(&bytes).unwrap();
    assert!(image.width() > 0 && image.height() > 0);
}

#[test]
fn simpson_integrates_x_squared() {
    let result = simpson_rule("x^2", 0.0, 2.0, 100).unwrap();
    assert_relative_eq!(result.estimate(), 8.0 / 3.0, epsilon = 1e-6);
    assert_png(result.image());
    assert!(result.data_uri().starts_with("data:image/png;base64,"));
}

#[test]
fn constants_are_integrated_exactly_by_every_rule() {
    let integrator = small_integrator();
    for (a, b, n) in [(0.0, 1.0, 2), (-3.0, 5.0, 8), (1.5, 2.25, 10)] {
        let expected = 4.5 * (b - a);
        let simpson = integrator.simpson_rule("4.5", a, b, n).unwrap();
        assert_relative_eq!(simpson.estimate(), expected, max_relative = 1e-12);
        for method in METHODS {
            let result = integrator.rectangle_rule("4.5", a, b, n + 1, method).unwrap();
            assert_relative_eq!(result.estimate(), expected, max_relative = 1e-12);
        }
    }
}

#[test]
fn left_under_and_right_over_estimate_an_increasing_line() {
    let f = |x: f64| x;
    for n in [1, 2, 3, 7, 50] {
        let left = rectangle_estimate(&f, 0.0, 1.0, n, RectangleMethod::Left).unwrap();
        let right = rectangle_estimate(&f, 0.0, 1.0, n, RectangleMethod::Right).unwrap();
        let midpoint = rectangle_estimate(&f, 0.0, 1.0, n, RectangleMethod::Midpoint).unwrap();
        assert!(left < 0.5, "left {} for n = {}", left, n);
        assert!(right > 0.5, "right {} for n = {}", right, n);
        assert_relative_eq!(midpoint, 0.5, epsilon = 1e-12);
    }
}

#[test]
fn odd_subdivisions_are_rejected_by_simpson() {
    let result = simpson_rule("x^2", 0.0, 1.0, 3);
    assert!(matches!(result, Err(QuadratureError::InvalidSubdivisionError { n: 3, .. })));
}

#[test]
fn unknown_rectangle_method_is_rejected() {
    let result = rectangle_rule("x^2", 0.0, 1.0, 4, "trapezoid");
    assert_eq!(result, Err(QuadratureError::UnknownMethodError("trapezoid".to_owned())));
}

#[test]
fn errors_shrink_as_n_grows() {
    let f = |x: f64| x.sin();
    let exact = 2.0;
    let simpson_coarse = (simpson_estimate(&f, 0.0, std::f64::consts::PI, 4).unwrap() - exact).abs();
    let simpson_fine = (simpson_estimate(&f, 0.0, std::f64::consts::PI, 32).unwrap() - exact).abs();
    assert!(simpson_fine < simpson_coarse);

    let g = |x: f64| x.exp();
    let exact = 1.0_f64.exp() - 1.0;
    for method in [RectangleMethod::Left, RectangleMethod::Right, RectangleMethod::Midpoint] {
        let coarse = (rectangle_estimate(&g, 0.0, 1.0, 5, method).unwrap() - exact).abs();
        let fine = (rectangle_estimate(&g, 0.0, 1.0, 50, method).unwrap() - exact).abs();
        assert!(fine < coarse, "{} did not converge", method);
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let integrator = small_integrator();
    let first = integrator.simpson_rule("sin(x) * exp(-x)", 0.0, 3.0, 20).unwrap();
    let second = integrator.simpson_rule("sin(x) * exp(-x)", 0.0, 3.0, 20).unwrap();
    assert_eq!(first.estimate().to_bits(), second.estimate().to_bits());
    assert_eq!(first.image(), second.image());

    let first = integrator.rectangle_rule("x**3 - x", -1.0, 2.0, 9, "midpoint").unwrap();
    let second = integrator.rectangle_rule("x**3 - x", -1.0, 2.0, 9, "midpoint").unwrap();
    assert_eq!(first.estimate().to_bits(), second.estimate().to_bits());
}

#[test]
fn rectangle_rule_renders_for_every_method() {
    let integrator = small_integrator();
    for method in METHODS {
        let result = integrator.rectangle_rule("cos(x)", 0.0, 3.0, 6, method).unwrap();
        assert_png(result.image());
    }
}

#[test]
fn parse_and_evaluation_errors_are_distinguished() {
    let integrator = small_integrator();
    let parse = integrator.simpson_rule("x + y", 0.0, 1.0, 2).unwrap_err();
    assert!(matches!(parse, QuadratureError::ParseError { .. }));
    assert!(parse.is_input_error());

    let evaluation = integrator.rectangle_rule("ln(x)", -1.0, 1.0, 4, "left").unwrap_err();
    assert!(matches!(evaluation, QuadratureError::EvaluationError { .. }));
    assert!(!evaluation.is_input_error());
}

#[test]
fn singularity_only_on_the_display_curve_still_integrates() {
    let integrator = small_integrator();
    let right = integrator.rectangle_rule("1/x", 0.0, 1.0, 4, "right").unwrap();
    let expected = 0.25 * (4.0 + 2.0 + 4.0 / 3.0 + 1.0);
    assert_relative_eq!(right.estimate(), expected, epsilon = 1e-12);
    assert_relative_eq!(right.estimate(), 2.0833, epsilon = 1e-4);
    assert_png(right.image());

    let midpoint = integrator.rectangle_rule("sin(x)/x", 0.0, 1.0, 4, "midpoint").unwrap();
    assert_relative_eq!(midpoint.estimate(), 0.946083, epsilon = 2e-3);

    // left samples the pole itself
    let left = integrator.rectangle_rule("1/x", 0.0, 1.0, 4, "left").unwrap_err();
    assert!(matches!(left, QuadratureError::EvaluationError { .. }));
}

#[test]
fn log_means_natural_logarithm() {
    let result = small_integrator().simpson_rule("log(x)", 1.0, std::f64::consts::E, 20).unwrap();
    assert_relative_eq!(result.estimate(), 1.0, epsilon = 1e-5);
}

#[test]
fn zero_sized_canvas_is_a_configuration_error() {
    let config = Configuration::new();
    let result = config.read(r#"{"plot": {"width": 0}}"#.as_bytes());
    assert!(matches!(result, Err(ConfigurationError::JsonParseError(_))));
    assert_eq!(config.plot_config().width(), 640);
}

#[test]
fn sample_configuration_file_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/plot.json");
    let config = Configuration::new();
    config.from_reader(path).unwrap();
    assert_eq!(config.plot_config().width(), 800);
    assert_eq!(config.plot_config().height(), 600);

    let result = config.integrator().simpson_rule("x", 0.0, 1.0, 2).unwrap();
    assert_relative_eq!(result.estimate(), 0.5, epsilon = 1e-12);
}
