use drillchart::{ChartBinding, ChartKind, Series, Surface, DEFAULT_CHANNEL_RANGE};

fn sample_series() -> Vec<Series> {
    vec![
        Series::new("Product A", vec![3.0, 5.0]),
        Series::new("Product B", vec![4.0, 2.0]),
    ]
}

fn sample_binding() -> ChartBinding {
    ChartBinding::new(
        Some(Surface::new("test_chart")),
        ChartKind::Line,
        sample_series(),
        "kWh",
    )
}

#[test]
fn one_color_per_series_fixed_for_the_binding_lifetime() {
    let mut binding = sample_binding();
    assert_eq!(binding.colors().len(), 2);

    let colors = binding.colors().to_vec();

    binding.render();
    binding.render();
    binding.open_breakdown(0);
    binding.open_breakdown(1);

    // Colors are sampled once at construction and reused everywhere.
    assert_eq!(binding.colors(), colors.as_slice());
    assert_eq!(binding.breakdown().unwrap().colors(), colors.as_slice());
}

#[test]
fn colors_stay_within_default_bounds_and_opaque() {
    let series: Vec<Series> = (0..40)
        .map(|i| Series::new(format!("S{}", i), vec![1.0]))
        .collect();
    let binding = ChartBinding::new(None, ChartKind::Line, series, "u");

    assert_eq!(binding.colors().len(), 40);
    for color in binding.colors() {
        for channel in [color.r(), color.g(), color.b()] {
            assert!(channel >= DEFAULT_CHANNEL_RANGE.min);
            assert!(channel <= DEFAULT_CHANNEL_RANGE.max);
        }
        assert_eq!(color.a(), 255);
    }
}

#[test]
fn breakdown_at_first_index_collects_series_values_in_order() {
    let mut binding = sample_binding();
    binding.render();
    binding.open_breakdown(0);

    let breakdown = binding.breakdown().expect("breakdown should be open");
    assert_eq!(breakdown.values(), &[3.0, 4.0]);
    assert_eq!(breakdown.labels(), &["Product A", "Product B"]);
    assert_eq!(breakdown.title(), "kWh for day 1");
}

#[test]
fn opening_a_second_breakdown_replaces_the_first() {
    let mut binding = sample_binding();
    binding.render();

    binding.open_breakdown(0);
    binding.open_breakdown(1);

    // Option field: at most one live instance by construction.
    let breakdown = binding.breakdown().expect("breakdown should be open");
    assert_eq!(breakdown.index(), 1);
    assert_eq!(breakdown.values(), &[5.0, 2.0]);
}

#[test]
fn dismiss_releases_the_breakdown_and_reopen_recreates_it() {
    let mut binding = sample_binding();
    binding.render();

    binding.open_breakdown(0);
    assert!(binding.breakdown().is_some());

    binding.dismiss_breakdown();
    assert!(binding.breakdown().is_none());

    binding.open_breakdown(0);
    let breakdown = binding.breakdown().expect("reopen should recreate");
    assert_eq!(breakdown.values(), &[3.0, 4.0]);
}

#[test]
fn render_creates_the_primary_instance_once() {
    let mut binding = sample_binding();
    assert!(!binding.is_rendered());

    binding.render();
    assert!(binding.is_rendered());

    // A second render call keeps the existing instance.
    binding.render();
    assert!(binding.is_rendered());
}

#[test]
fn render_without_a_surface_does_not_panic() {
    let mut binding = ChartBinding::new(None, ChartKind::Bar, sample_series(), "kWh");
    // Interaction attachment is logged and skipped; rendering still works.
    binding.render();
    assert!(binding.is_rendered());
}

#[test]
fn axis_unit_defaults_to_day_and_flows_into_the_breakdown_title() {
    let mut binding = sample_binding();
    assert_eq!(binding.axis_unit(), "day");

    binding = ChartBinding::new(None, ChartKind::Line, sample_series(), "kr")
        .with_axis_unit("week");
    binding.open_breakdown(1);
    assert_eq!(binding.breakdown().unwrap().title(), "kr for week 2");
}

#[test]
fn chart_kind_comes_from_a_string() {
    let kind: ChartKind = "bar".parse().expect("bar should parse");
    let binding = ChartBinding::new(None, kind, sample_series(), "kWh");
    assert_eq!(binding.kind(), ChartKind::Bar);
}

#[test]
fn empty_series_list_yields_zero_colors() {
    let binding = ChartBinding::new(None, ChartKind::Line, Vec::new(), "kWh");
    assert!(binding.colors().is_empty());
}
