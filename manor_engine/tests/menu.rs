use manor_engine::repl::{MenuChoice, parse_menu_choice};
use manor_engine::{
    CountdownTimer, DisplayEvent, Game, GameContext, GameOutcome, HeadlessDisplay, InputEvent, InputSource, Player,
    RecordingAudio, ScriptedInput, SilentAudio, SoundEvent, SoundId, run_game,
};

use std::collections::VecDeque;
use std::io;

fn quiet_game(display: HeadlessDisplay) -> Game {
    let ctx = GameContext::new(
        Player::new(),
        CountdownTimer::new(480),
        Box::new(display),
        Box::new(SilentAudio),
    );
    Game::new(ctx)
}

/// Replays raw read results, including Ctrl-C and read errors.
struct EventScript(VecDeque<io::Result<InputEvent>>);

impl EventScript {
    fn new(events: impl IntoIterator<Item = io::Result<InputEvent>>) -> Self {
        Self(events.into_iter().collect())
    }
}

impl InputSource for EventScript {
    fn read_line(&mut self, _prompt: &str) -> io::Result<InputEvent> {
        self.0.pop_front().unwrap_or(Ok(InputEvent::Eof))
    }
}

fn line(text: &str) -> io::Result<InputEvent> {
    Ok(InputEvent::Line(text.to_string()))
}

fn not_utf8() -> io::Result<InputEvent> {
    Err(io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"))
}

#[test]
fn menu_rejects_unknown_options_and_never_starts_the_clock() {
    let display = HeadlessDisplay::new();
    let transcript = display.transcript();
    let audio = RecordingAudio::new();
    let sounds = audio.log();
    let ctx = GameContext::new(Player::new(), CountdownTimer::new(480), Box::new(display), Box::new(audio));
    let mut game = Game::new(ctx);

    let mut input = ScriptedInput::new(["dance", "HELP", "  quit  "]);
    let outcome = run_game(&mut game, &mut input).unwrap();

    assert_eq!(outcome, GameOutcome::Quit);
    assert_eq!(transcript.count("Unknown option."), 1);
    assert!(transcript.contains("Player 2 holds the paper map"));
    assert!(transcript.contains("Goodbye!"));
    assert!(transcript.events().contains(&DisplayEvent::Intro));
    assert!(!game.ctx.timer.is_running());
    assert!(!sounds.borrow().contains(&SoundEvent::Music(SoundId::GameLoop)));
    assert_eq!(sounds.borrow().first(), Some(&SoundEvent::Music(SoundId::MenuTheme)));
}

#[test]
fn end_of_input_at_the_menu_quits() {
    let mut game = quiet_game(HeadlessDisplay::new());
    let mut input = ScriptedInput::new(Vec::<String>::new());
    assert_eq!(run_game(&mut game, &mut input).unwrap(), GameOutcome::Quit);
}

#[test]
fn interrupt_cancels_the_line_and_reprompts() {
    let display = HeadlessDisplay::new();
    let transcript = display.transcript();
    let mut game = quiet_game(display);
    let mut input = EventScript::new([
        Ok(InputEvent::Interrupted),
        line("play"),
        Ok(InputEvent::Interrupted),
        line("tutorial"),
        line("quit"),
    ]);

    assert_eq!(run_game(&mut game, &mut input).unwrap(), GameOutcome::Quit);
    assert_eq!(transcript.count("Command canceled."), 1);
    assert_eq!(game.ctx.player.card_count(), 1);
    assert_eq!(game.turn_count, 2);
}

#[test]
fn unreadable_lines_are_skipped_and_play_continues() {
    let display = HeadlessDisplay::new();
    let transcript = display.transcript();
    let mut game = quiet_game(display);
    let mut input = EventScript::new([not_utf8(), line("play"), line("tutorial"), not_utf8(), line("go living")]);

    let outcome = run_game(&mut game, &mut input).unwrap();

    assert_eq!(outcome, GameOutcome::Quit, "end of input still quits normally");
    assert_eq!(game.room, manor_engine::RoomId::Living);
    assert_eq!(game.ctx.player.card_count(), 1);
    assert_eq!(transcript.count("That line couldn't be read."), 2);
    assert!(transcript.contains("Cards collected: 1/4"));
    assert!(!game.ctx.timer.is_running());
}

#[test]
fn other_read_failures_still_end_the_run() {
    let mut game = quiet_game(HeadlessDisplay::new());
    let mut input = EventScript::new([line("play"), Err(io::Error::other("terminal vanished"))]);
    let err = run_game(&mut game, &mut input).unwrap_err();
    assert!(format!("{err:#}").contains("reading player input"));
}

#[test]
fn menu_parsing_is_exact_after_trimming() {
    assert_eq!(parse_menu_choice(" Play "), MenuChoice::Play);
    assert_eq!(parse_menu_choice("p"), MenuChoice::Unknown);
}
