use dashviz::dashboard::REFRESH_SAMPLE;
use dashviz::{ChartError, ChartTarget, Dashboard, DashboardConfig};
use std::time::Duration;

const LABELS: [&str; 4] = ["30m", "25m", "20m", "15m"];

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn dashboard() -> Dashboard {
    Dashboard::with_default_charts(DashboardConfig::default())
}

fn ys(dash: &Dashboard, key: &str) -> Vec<f64> {
    dash.target(key)
        .unwrap()
        .line
        .points()
        .iter()
        .map(|p| p.y)
        .collect()
}

#[test]
fn second_draw_replaces_all_geometry() {
    let mut dash = dashboard();
    dash.draw_chart(&["a", "b", "c", "d"], &[5.0, 0.0, 0.0, 0.0], "ssh")
        .unwrap();
    dash.draw_chart(&LABELS, &[0.0, 0.0, 0.0, 10.0], "ssh").unwrap();

    let t = dash.target("ssh").unwrap();
    assert_eq!(t.line.points().len(), 4);
    assert_eq!(t.fill.points().len(), 6);
    assert_eq!(ys(&dash, "ssh"), [105.0, 105.0, 105.0, 5.0]);
    let texts: Vec<&str> = t.axis.children().iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, LABELS);
}

#[test]
fn missing_target_is_reported_not_fatal() {
    let mut dash = Dashboard::new(DashboardConfig::default());
    let err = dash
        .draw_chart(&LABELS, &[1.0, 2.0, 3.0, 4.0], "nope")
        .unwrap_err();
    assert_eq!(err, ChartError::MissingTarget { key: "nope".into() });
    assert_eq!(dash.pending_tasks(), 0);
}

#[test]
fn invalid_length_leaves_chart_untouched() {
    let mut dash = dashboard();
    dash.draw_chart(&LABELS, &[1.0, 2.0, 3.0, 4.0], "signs").unwrap();
    let before = dash.target("signs").unwrap().clone();

    let err = dash
        .draw_chart(&LABELS, &[1.0, 2.0, 3.0], "signs")
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::InvalidSeriesLength { expected: 4, actual: 3, .. }
    ));
    let err = dash
        .draw_chart(&["30m", "25m"], &[1.0, 2.0, 3.0, 4.0], "signs")
        .unwrap_err();
    assert!(matches!(err, ChartError::InvalidSeriesLength { actual: 2, .. }));

    assert_eq!(dash.target("signs").unwrap(), &before);
}

#[test]
fn failing_chart_does_not_block_batch() {
    let mut dash = dashboard();
    dash.unmount("ssh");
    let report = dash.init_charts(
        &LABELS,
        &[1.0, 2.0, 3.0, 4.0],
        &[1.0, 1.0, 1.0, 1.0],
        &[f64::NAN, 1.0, 1.0, 1.0],
    );
    assert_eq!(report.drawn, [("employee".to_string(), 1)]);
    let failed: Vec<&str> = report.failed.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(failed, ["ssh", "signs"]);
    assert!(!report.is_complete());
    assert_eq!(ys(&dash, "employee").len(), 4);
    assert!(dash.target("signs").unwrap().line.points().is_empty());
}

#[test]
fn delayed_refresh_redraws_employee() {
    let mut dash = dashboard();
    let report = dash.init_charts(
        &LABELS,
        &[4.0, 3.0, 2.0, 1.0],
        &[1.0, 2.0, 3.0, 4.0],
        &[0.0, 0.0, 0.0, 0.0],
    );
    assert!(report.is_complete());
    assert_eq!(ys(&dash, "employee")[0], 5.0);

    dash.advance(ms(1499));
    assert_eq!(ys(&dash, "employee")[0], 5.0);
    assert_eq!(dash.target("employee").unwrap().root.generation(), 1);

    dash.advance(ms(1));
    let employee = dash.target("employee").unwrap();
    assert_eq!(employee.root.generation(), 2);
    let ys = ys(&dash, "employee");
    assert_eq!(ys[0], 105.0);
    assert_eq!(ys[3], 5.0);
    assert!((ys[1] - (105.0 - 100.0 * REFRESH_SAMPLE[1] / 6.0)).abs() < 1e-9);
    assert!(dash.target("employee").unwrap().root.animation().is_some());

    // the other charts are left alone by the refresh
    assert_eq!(dash.target("ssh").unwrap().root.generation(), 1);
}

#[test]
fn animation_clears_after_delay() {
    let mut dash = dashboard();
    dash.draw_chart(&LABELS, &[1.0, 2.0, 3.0, 4.0], "ssh").unwrap();
    let anim = dash.target("ssh").unwrap().root.animation().cloned().unwrap();
    assert_eq!(anim.name, "loadChart");
    assert_eq!(anim.duration_ms, 1000);

    dash.advance(ms(1199));
    assert!(dash.target("ssh").unwrap().root.animation().is_some());
    dash.advance(ms(1));
    assert!(dash.target("ssh").unwrap().root.animation().is_none());

    // and it plays again on the next draw
    dash.draw_chart(&LABELS, &[4.0, 3.0, 2.0, 1.0], "ssh").unwrap();
    assert!(dash.target("ssh").unwrap().root.animation().is_some());
}

#[test]
fn stale_clear_does_not_cut_newer_animation() {
    let mut dash = dashboard();
    dash.draw_chart(&LABELS, &[1.0, 2.0, 3.0, 4.0], "ssh").unwrap();
    dash.advance(ms(1000));
    dash.draw_chart(&LABELS, &[4.0, 3.0, 2.0, 1.0], "ssh").unwrap();

    // first draw's clear fires at 1200ms: stale, must not remove the second animation
    dash.advance(ms(300));
    assert!(dash.target("ssh").unwrap().root.animation().is_some());

    // second draw's clear fires at 2200ms
    dash.advance(ms(900));
    assert!(dash.target("ssh").unwrap().root.animation().is_none());
}

#[test]
fn config_delays_are_honored() {
    let config = DashboardConfig {
        animation_clear_delay_ms: 10,
        refresh_delay_ms: 20,
        ..DashboardConfig::default()
    };
    let mut dash = Dashboard::with_default_charts(config);
    dash.init_charts(&LABELS, &[1.0; 4], &[1.0; 4], &[1.0; 4]);
    assert_eq!(dash.advance(ms(10)), 3);
    assert_eq!(dash.advance(ms(10)), 1);
    assert_eq!(dash.target("employee").unwrap().root.generation(), 2);
    assert_eq!(dash.run_until_idle(), 1);
    assert_eq!(dash.pending_tasks(), 0);
}

#[test]
fn mounted_target_is_used_as_given() {
    let mut dash = Dashboard::new(DashboardConfig::default());
    assert!(dash.mount("custom", ChartTarget::new()).is_none());
    dash.draw_chart(&LABELS, &[0.0, 1.0, 0.0, 1.0], "custom").unwrap();
    assert_eq!(dash.charts().count(), 1);
    assert!(dash.mount("custom", ChartTarget::new()).is_some());
}

#[test]
fn clear_from_replaced_target_misses_remounted_chart() {
    let mut dash = Dashboard::new(DashboardConfig::default());
    dash.mount("employee", ChartTarget::new());
    assert_eq!(dash.draw_chart(&LABELS, &[1.0, 2.0, 3.0, 4.0], "employee"), Ok(1));

    dash.advance(ms(100));
    dash.mount("employee", ChartTarget::new());
    assert_eq!(dash.draw_chart(&LABELS, &[4.0, 3.0, 2.0, 1.0], "employee"), Ok(2));

    // the replaced target's clear fires at 1200ms
    dash.advance(ms(1100));
    assert!(dash.target("employee").unwrap().root.animation().is_some());

    // the new draw's own clear fires at 1300ms
    dash.advance(ms(100));
    assert!(dash.target("employee").unwrap().root.animation().is_none());
}

#[test]
fn generations_keep_counting_across_unmount() {
    let mut dash = dashboard();
    dash.draw_chart(&LABELS, &[1.0, 2.0, 3.0, 4.0], "ssh").unwrap();
    dash.unmount("ssh");
    dash.mount("ssh", ChartTarget::new());
    assert_eq!(dash.target("ssh").unwrap().root.generation(), 0);

    dash.advance(ms(500));
    assert_eq!(dash.draw_chart(&LABELS, &[1.0, 1.0, 1.0, 1.0], "ssh"), Ok(2));
    dash.advance(ms(700));
    assert!(dash.target("ssh").unwrap().root.animation().is_some());
}
