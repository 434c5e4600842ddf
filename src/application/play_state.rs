/// Whether the simulation advances on its own each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlayState {
    Paused,
    #[default]
    Playing,
}

impl PlayState {
    pub const fn is_playing(self) -> bool {
        matches!(self, PlayState::Playing)
    }

    /// Flip between paused and playing
    pub const fn toggle(self) -> Self {
        match self {
            PlayState::Paused => PlayState::Playing,
            PlayState::Playing => PlayState::Paused,
        }
    }

    /// Status label for the overlay
    pub const fn label(self) -> &'static str {
        match self {
            PlayState::Paused => "Paused",
            PlayState::Playing => "Playing",
        }
    }
}
