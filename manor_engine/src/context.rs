//! Services shared by every handler: the player, the clock, and the two sinks.
use crate::audio::{AudioSink, SoundId};
use crate::card::{CARD_TOTAL, Card};
use crate::display::DisplaySink;
use crate::room::RoomId;
use crate::timer::CountdownTimer;
use crate::{Item, Player};

use log::info;

pub struct GameContext {
    pub player: Player,
    pub timer: CountdownTimer,
    pub display: Box<dyn DisplaySink>,
    pub audio: Box<dyn AudioSink>,
}
impl GameContext {
    pub fn new(player: Player, timer: CountdownTimer, display: Box<dyn DisplaySink>, audio: Box<dyn AudioSink>) -> Self {
        Self {
            player,
            timer,
            display,
            audio,
        }
    }

    pub fn give_item(&mut self, item: Item) -> bool {
        self.player.give_item(item)
    }

    pub fn has_item(&self, name_or_id: &str) -> bool {
        self.player.has_item(name_or_id)
    }

    /// Award `card` if the player doesn't hold it yet. Returns true if it was new.
    pub fn give_card(&mut self, card: Card) -> bool {
        if !self.player.add_card(card) {
            return false;
        }
        info!(
            "card awarded: {card} ({}/{CARD_TOTAL} collected)",
            self.player.card_count()
        );
        self.audio.play_sfx(SoundId::CardGained);
        true
    }

    /// Redraw the HUD for `room`.
    pub fn draw_frame(&mut self, room: RoomId) {
        let remaining = self.timer.remaining_seconds();
        let cards = self.player.card_count();
        self.display.frame(room.title(), remaining, cards, CARD_TOTAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{RecordingAudio, SoundEvent};
    use crate::display::{DisplayEvent, HeadlessDisplay};

    #[test]
    fn card_award_is_once_with_sound() {
        let audio = RecordingAudio::new();
        let log = audio.log();
        let mut ctx = GameContext::new(
            Player::new(),
            CountdownTimer::new(60),
            Box::new(HeadlessDisplay::new()),
            Box::new(audio),
        );
        assert!(ctx.give_card(Card::Raven));
        assert!(!ctx.give_card(Card::Raven));
        assert_eq!(*log.borrow(), vec![SoundEvent::Sfx(SoundId::CardGained)]);
    }

    #[test]
    fn frame_reports_room_time_and_cards() {
        let display = HeadlessDisplay::new();
        let transcript = display.transcript();
        let mut ctx = GameContext::new(
            Player::new(),
            CountdownTimer::new(75),
            Box::new(display),
            Box::new(RecordingAudio::new()),
        );
        ctx.give_card(Card::Beetle);
        ctx.draw_frame(RoomId::Hallway);
        assert_eq!(
            transcript.last_frame(),
            Some(DisplayEvent::Frame {
                room_title: "Hallway".into(),
                seconds_remaining: 75,
                card_count: 1,
                card_total: 4,
            })
        );
    }

    #[test]
    fn item_helpers_delegate_to_player() {
        let mut ctx = GameContext::new(
            Player::new(),
            CountdownTimer::new(60),
            Box::new(HeadlessDisplay::new()),
            Box::new(RecordingAudio::new()),
        );
        assert!(ctx.give_item(Item::new("matches", "Box of Matches", "Damp.", 1)));
        assert!(ctx.has_item("box of matches"));
    }
}
