use assembly_endgame::game::{
    CUSTOM_NEW_GAME, CUSTOM_START_TIMER, EVENT_NEW_GAME, EVENT_TIME_UP,
};
use assembly_endgame::AssemblyEndgame;
use guess_engine::bridge::protocol::{
    FLAG_LOST, FLAG_OVER, FLAG_TIME_EXPIRED, HEADER_EVENT_COUNT, HEADER_FLAGS,
    HEADER_SOUND_COUNT, HEADER_TIME_LEFT, HEADER_TIMER_PHASE, HEADER_WORD_LENGTH,
};
use guess_engine::InputEvent;
use guess_web::GameRunner;

const FRAME: f32 = 1.0 / 60.0;

fn runner() -> GameRunner<AssemblyEndgame> {
    let mut r = GameRunner::with_seed(AssemblyEndgame::new(), 1234);
    r.init();
    r
}

fn run_seconds(r: &mut GameRunner<AssemblyEndgame>, seconds: u32) {
    for _ in 0..seconds * 60 {
        r.tick(FRAME);
    }
}

#[test]
fn status_buffer_is_populated_after_init() {
    let r = runner();
    let word_len = r.game().state().secret_word().len() as f32;
    assert_eq!(r.status().header(HEADER_WORD_LENGTH), word_len);
    assert_eq!(r.status().header(HEADER_TIME_LEFT), 120.0);
    assert_eq!(r.status().header(HEADER_TIMER_PHASE), 0.0);
    assert!(r.snapshot_json().contains("\"clockLabel\":\"2:00\""));
}

#[test]
fn clock_runs_at_frame_rate_after_first_key() {
    let mut r = runner();
    run_seconds(&mut r, 2);
    assert_eq!(r.game().timer().time_left(), 120);

    r.push_input(InputEvent::KeyDown { key_code: 'Q' as u32 });
    run_seconds(&mut r, 5);
    let left = r.game().timer().time_left();
    assert!((115..=116).contains(&left), "time left {left}");
}

#[test]
fn timing_out_is_reported_to_the_view() {
    let mut r = runner();
    r.push_input(InputEvent::KeyDown { key_code: 'Q' as u32 });
    r.tick(FRAME);

    let mut saw_time_up = false;
    for _ in 0..130 * 60 {
        r.tick(FRAME);
        let events = r.status().header(HEADER_EVENT_COUNT) as usize;
        let offset = r.status().layout().event_data_offset;
        for i in 0..events {
            if r.status().as_slice()[offset + i * 4] == EVENT_TIME_UP {
                saw_time_up = true;
            }
        }
    }
    assert!(saw_time_up || r.game().status().is_won);
    if !r.game().status().is_won {
        let flags = r.status().header(HEADER_FLAGS) as u32;
        assert_eq!(flags & (FLAG_LOST | FLAG_OVER | FLAG_TIME_EXPIRED), FLAG_LOST | FLAG_OVER | FLAG_TIME_EXPIRED);
        assert!(r.snapshot_json().contains("Time's Up!"));
    }
}

#[test]
fn new_game_leaves_no_zombie_ticks() {
    let mut r = runner();
    r.push_input(InputEvent::KeyDown { key_code: 'Q' as u32 });
    run_seconds(&mut r, 3);
    r.push_input(InputEvent::Custom { kind: CUSTOM_NEW_GAME, a: 0.0, b: 0.0, c: 0.0 });
    run_seconds(&mut r, 10);

    assert_eq!(r.game().timer().time_left(), 120);
    assert!(r.context().scheduler.is_empty());
    assert!(r.game().state().guessed_letters().is_empty());
}

#[test]
fn runtime_vocabulary_replaces_words() {
    let mut r = runner();
    r.load_vocabulary(
        r##"{
            "words": ["ferris"],
            "languages": [
                { "name": "C", "backgroundColor": "#555", "color": "#fff" },
                { "name": "Rust", "backgroundColor": "#dea584", "color": "#000" }
            ],
            "farewells": ["So long, {}"]
        }"##,
    );
    assert_eq!(r.game().state().secret_word(), "ferris");
    assert_eq!(r.game().state().max_wrong_guesses(), 1);

    r.load_vocabulary(r#"{"words": []}"#);
    assert_eq!(r.game().state().secret_word(), "ferris");
}

#[test]
fn long_first_frame_is_not_charged_to_the_clock() {
    let mut r = runner();
    r.tick(FRAME);
    r.push_input(InputEvent::KeyDown { key_code: 'Q' as u32 });
    r.tick(5.0);
    assert!(r.game().timer().is_running());
    assert_eq!(r.game().timer().time_left(), 120);

    r.tick(1.0);
    assert_eq!(r.game().timer().time_left(), 119);
}

#[test]
fn start_button_on_a_long_frame_starts_from_full_time() {
    let mut r = runner();
    r.push_input(InputEvent::Custom { kind: CUSTOM_START_TIMER, a: 0.0, b: 0.0, c: 0.0 });
    r.tick(30.0);
    assert_eq!(r.game().timer().time_left(), 120);
    assert_eq!(r.status().header(HEADER_TIME_LEFT), 120.0);
}

#[test]
fn vocabulary_load_publishes_only_the_new_game_event() {
    let mut r = runner();
    r.push_input(InputEvent::KeyDown { key_code: 'Q' as u32 });
    r.tick(FRAME);
    assert!(r.status().header(HEADER_EVENT_COUNT) >= 1.0);

    r.load_vocabulary(
        r##"{
            "words": ["ferris"],
            "languages": [
                { "name": "C", "backgroundColor": "#555", "color": "#fff" },
                { "name": "Rust", "backgroundColor": "#dea584", "color": "#000" }
            ],
            "farewells": ["So long, {}"]
        }"##,
    );
    let status = r.status();
    assert_eq!(status.header(HEADER_EVENT_COUNT), 1.0);
    assert_eq!(status.header(HEADER_SOUND_COUNT), 0.0);
    let offset = status.layout().event_data_offset;
    assert_eq!(&status.as_slice()[offset..offset + 2], &[EVENT_NEW_GAME, 6.0]);
}
