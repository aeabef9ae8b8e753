//! End-to-end scenarios for the card controller.

use std::time::Duration;

use reconnect_core::{Card, CardConfig, CardHosts, Panel, PanelState, Stage};
use tokio::time::sleep;

fn start() -> (Card, CardHosts) {
    let hosts = CardHosts::new();
    let config = CardConfig {
        seed: Some(11),
        ..Default::default()
    };
    let card = Card::initialize(config, hosts.clone()).unwrap();
    (card, hosts)
}

#[tokio::test(start_paused = true)]
async fn starts_on_prompt() {
    let (card, _) = start();
    assert_eq!(card.panels(), PanelState::new());
    assert!(card.is_raining());
}

#[tokio::test(start_paused = true)]
async fn affirm_shows_message_and_forces_overlay_hidden() {
    let (card, _) = start();
    card.decline();
    assert!(card.panels().is_visible(Panel::Overlay));

    card.affirm();
    let panels = card.panels();
    assert!(!panels.is_visible(Panel::Prompt));
    assert!(panels.is_visible(Panel::Affirmative));
    assert!(!panels.is_visible(Panel::Overlay));
}

#[tokio::test(start_paused = true)]
async fn affirm_twice_equals_once() {
    let (card, _) = start();
    let mut rx = card.subscribe();

    card.affirm();
    let once = card.panels();
    assert!(rx.has_changed().unwrap());
    rx.mark_unchanged();

    card.affirm();
    assert_eq!(card.panels(), once);
    assert!(!rx.has_changed().unwrap(), "second affirm notifies nobody");
}

#[tokio::test(start_paused = true)]
async fn decline_flashes_overlay_for_two_and_a_half_seconds() {
    let (card, hosts) = start();
    let baseline = hosts.burst.len();

    let heart = card.decline();
    assert!(card.panels().is_visible(Panel::Overlay));
    assert_eq!(card.panels().stage(), Stage::Prompt);
    assert_eq!(hosts.burst.len(), baseline + 1);
    assert!(hosts.burst.contains(heart));

    sleep(Duration::from_millis(2499)).await;
    assert!(card.panels().is_visible(Panel::Overlay));

    sleep(Duration::from_millis(2)).await;
    assert!(!card.panels().is_visible(Panel::Overlay));
    assert!(hosts.burst.contains(heart), "heart outlives the overlay");

    sleep(Duration::from_millis(500)).await;
    assert_eq!(hosts.burst.len(), baseline);
}

#[tokio::test(start_paused = true)]
async fn overlapping_declines_end_with_first_hide() {
    let (card, hosts) = start();

    card.decline();
    sleep(Duration::from_secs(1)).await;
    card.decline();
    assert_eq!(hosts.burst.len(), 2);

    sleep(Duration::from_millis(1501)).await;
    assert!(!card.panels().is_visible(Panel::Overlay));
}

#[tokio::test(start_paused = true)]
async fn decline_keeps_affirmative_stage() {
    let (card, _) = start();
    card.affirm();
    card.decline();

    let panels = card.panels();
    assert_eq!(panels.stage(), Stage::Affirmative);
    assert!(panels.is_visible(Panel::Overlay));

    sleep(Duration::from_millis(2600)).await;
    assert_eq!(card.panels().stage(), Stage::Affirmative);
    assert!(!card.panels().is_visible(Panel::Overlay));
}

#[tokio::test(start_paused = true)]
async fn return_after_affirm_restores_initial_state() {
    let (card, _) = start();
    card.affirm();
    assert!(card.return_to_prompt());
    assert_eq!(card.panels(), PanelState::new());
}

#[tokio::test(start_paused = true)]
async fn return_from_prompt_is_ignored() {
    let (card, _) = start();
    let rx = card.subscribe();
    assert!(!card.return_to_prompt());
    assert_eq!(card.panels(), PanelState::new());
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn subscribers_follow_every_transition() {
    let (card, _) = start();
    let mut rx = card.subscribe();

    card.affirm();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().stage(), Stage::Affirmative);

    card.return_to_prompt();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().stage(), Stage::Prompt);
}

#[tokio::test(start_paused = true)]
async fn rain_runs_until_shutdown() {
    let (card, hosts) = start();

    sleep(Duration::from_millis(1300)).await;
    assert_eq!(card.spawner().spawned_count(), 2);
    assert_eq!(hosts.rain.len(), 2);

    card.shutdown();
    sleep(Duration::from_secs(13)).await;
    assert_eq!(card.spawner().spawned_count(), 2);
    assert!(hosts.rain.is_empty());
}
