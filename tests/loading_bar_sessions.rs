use dashviz::Dashboard;
use dashviz::loading_bar::{FADE_IN, FADE_OUT, Phase};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn session_runs_through_all_phases() {
    let mut dash = Dashboard::default();
    let id = dash.start_loading_bar();
    let bar = dash.loading_bar(id).unwrap();
    assert!(bar.is_visible());
    assert_eq!(bar.animation(), Some(FADE_IN));
    assert_eq!(bar.phase(), Phase::FadingIn);

    // 800ms fade-in, then width 0 right away
    dash.advance(ms(800));
    assert_eq!(dash.loading_bar(id).unwrap().width_percent(), 0);
    dash.advance(ms(85 * 5));
    assert_eq!(dash.loading_bar(id).unwrap().width_percent(), 50);
    dash.advance(ms(85 * 5));
    assert_eq!(dash.loading_bar(id).unwrap().width_percent(), 100);

    // one more tick notices completion, then 500ms settle
    dash.advance(ms(85));
    assert_eq!(dash.loading_bar(id).unwrap().phase(), Phase::Settling);
    dash.advance(ms(500));
    assert_eq!(dash.loading_bar(id).unwrap().animation(), Some(FADE_OUT));
    dash.advance(ms(1000));
    assert!(dash.loading_bar(id).is_none());
    assert_eq!(dash.pending_tasks(), 0);
}

#[test]
fn sessions_keep_their_own_progress() {
    let mut dash = Dashboard::default();
    let a = dash.start_loading_bar();
    dash.advance(ms(800 + 85 * 3));
    let b = dash.start_loading_bar();
    assert_ne!(a, b);
    dash.advance(ms(800));

    let wa = dash.loading_bar(a).unwrap().width_percent();
    let wb = dash.loading_bar(b).unwrap().width_percent();
    assert!(wa > wb, "a={} b={}", wa, wb);
    assert_eq!(wb, 0);

    dash.run_until_idle();
    assert!(dash.loading_bar(a).is_none());
    assert!(dash.loading_bar(b).is_none());
}
