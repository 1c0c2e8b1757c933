use number_tile::cues::Cue;
use number_tile::input::ButtonState;
use number_tile::sprite::{Face, Frame};
use number_tile::state::{shrunk_side, Blink, FrameInput, Gesture, Shrink, TileState};

fn input(elapsed: u32, inside: bool, button: ButtonState, is_target: bool) -> FrameInput {
    FrameInput {
        elapsed,
        inside,
        button,
        is_target,
        original_side: 40,
    }
}

fn armed() -> TileState {
    TileState::Interactive(Gesture {
        hovered: true,
        released: true,
    })
}

#[test]
fn test_press_when_armed_starts_animation() {
    let step = armed().step(&input(16, true, ButtonState::Pressed, true));
    assert_eq!(step.state, TileState::Blinking(Blink::default()));
    assert_eq!(step.cue, Some(Cue::Correct));
    assert!(!step.resolved);

    let step = armed().step(&input(16, true, ButtonState::Pressed, false));
    assert_eq!(step.state, TileState::Shrinking(Shrink { elapsed: 0, side: 40 }));
    assert_eq!(step.cue, Some(Cue::Incorrect));
    assert!(!step.resolved);
}

#[test]
fn test_press_when_not_armed_only_hovers() {
    let step = TileState::default().step(&input(16, true, ButtonState::Pressed, true));

    assert_eq!(
        step.state,
        TileState::Interactive(Gesture {
            hovered: true,
            released: false,
        })
    );
    assert_eq!(step.cue, None);
}

#[test]
fn test_outside_resets_gesture() {
    let step = armed().step(&input(16, false, ButtonState::Released, true));

    assert_eq!(step.state, TileState::default());
    assert_eq!(step.state.frame(), Frame::First);
}

#[test]
fn test_blink_timer_reaches_total() {
    let blink = TileState::Blinking(Blink {
        elapsed: 3500,
        frame_elapsed: 500,
        frame: Frame::Second,
    });

    let step = blink.step(&input(499, false, ButtonState::Released, true));
    assert!(!step.resolved);
    assert!(step.state.is_visible());

    let step = step.state.step(&input(1, false, ButtonState::Released, true));
    assert!(step.resolved);
    assert_eq!(step.state, TileState::Hidden);
    assert_eq!(step.cue, None);
}

#[test]
fn test_blink_frame_carries_remainder() {
    let blink = TileState::Blinking(Blink::default());

    let step = blink.step(&input(1300, true, ButtonState::Pressed, true));

    assert_eq!(
        step.state,
        TileState::Blinking(Blink {
            elapsed: 1300,
            frame_elapsed: 300,
            frame: Frame::Second,
        })
    );
}

#[test]
fn test_faces_and_frames() {
    assert_eq!(TileState::default().face(), Face::Normal);
    assert_eq!(armed().frame(), Frame::Second);
    assert_eq!(TileState::Blinking(Blink::default()).face(), Face::Blinking);
    assert_eq!(TileState::Shrinking(Shrink::start(40)).face(), Face::Normal);
    assert_eq!(TileState::Shrinking(Shrink::start(40)).frame(), Frame::Second);
    assert!(!TileState::Hidden.is_visible());
    assert!(!TileState::Hidden.is_interactive());
}

#[test]
fn test_hidden_step_is_noop() {
    let step = TileState::Hidden.step(&input(1000, true, ButtonState::Pressed, true));

    assert_eq!(step.state, TileState::Hidden);
    assert_eq!(step.cue, None);
    assert!(!step.resolved);
}

#[test]
fn test_shrunk_side() {
    assert_eq!(shrunk_side(40, 0), 40);
    assert_eq!(shrunk_side(40, 1000), 30);
    assert_eq!(shrunk_side(40, 2000), 20);
    assert_eq!(shrunk_side(40, 3999), 0);
    assert_eq!(shrunk_side(40, 4000), 0);
    assert_eq!(shrunk_side(40, 9000), 0);
    assert_eq!(shrunk_side(150, 100), 146);
}

#[test]
fn test_shrink_to_zero_hides() {
    let shrinking = TileState::Shrinking(Shrink { elapsed: 3900, side: 1 });

    let step = shrinking.step(&input(100, true, ButtonState::Pressed, false));

    assert_eq!(step.state, TileState::Hidden);
    assert!(!step.resolved);
}
