//! Type definitions and enums for the application state and navigation.

use crate::grid::CellKind;

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the visualizer. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen.
    MainMenu(MainMenuItem),
    /// Options configuration screen, where the algorithm and the replay speed are picked.
    OptionsMenu(OptionsMenuItem),
    /// Grid editing and visualization screen.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu, in the order they are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Visualize" menu option, which opens the grid screen.
    Visualize,
    /// "Options" menu option.
    Options,
    /// "Quit" menu option.
    Quit,
}

impl MainMenuItem {
    /// Item drawn below this one; the last item stays selected.
    pub(crate) const fn below(self) -> Self {
        match self {
            Self::Visualize => Self::Options,
            Self::Options | Self::Quit => Self::Quit,
        }
    }

    /// Item drawn above this one; the first item stays selected.
    pub(crate) const fn above(self) -> Self {
        match self {
            Self::Visualize | Self::Options => Self::Visualize,
            Self::Quit => Self::Options,
        }
    }
}

/// Options menu navigation choices.
///
/// The algorithm and speed entries cycle their setting when selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OptionsMenuItem {
    /// Search algorithm used by the next run.
    Algorithm,
    /// Replay speed.
    Speed,
    /// "Back" navigation option.
    Back,
}

impl OptionsMenuItem {
    /// Item drawn below this one; the last item stays selected.
    pub(crate) const fn below(self) -> Self {
        match self {
            Self::Algorithm => Self::Speed,
            Self::Speed | Self::Back => Self::Back,
        }
    }

    /// Item drawn above this one; the first item stays selected.
    pub(crate) const fn above(self) -> Self {
        match self {
            Self::Algorithm | Self::Speed => Self::Algorithm,
            Self::Back => Self::Speed,
        }
    }
}

/// Generic menu type configuration.
///
/// This enumeration holds the different specifics particular to each generic menu type in the
/// application's interface. Generic here means they share enough features to be considered worth
/// joining together part of their functionality.
pub(crate) enum MenuType {
    /// Main menu configuration, holding its number of items.
    MainMenu(u8),
    /// Options menu configuration, holding its number of items.
    OptionsMenu(u8),
}

impl MenuType {
    /// Returns the string representation of the menu type.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::OptionsMenu(_) => "Options Menu",
        }
    }

    /// Returns the numeric value stored by the menu type variant.
    ///
    /// This function provides access to the number of menu items for layout calculations, allowing
    /// the UI to properly size the menu containers.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::OptionsMenu(value) => *value,
        }
    }
}

/// Cell kind painted by the enter key on the grid screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Brush {
    /// Impassable wall.
    #[default]
    Wall,
    /// Weighted cell, costlier to cross.
    Hill,
    /// Eraser.
    Empty,
    /// Search origin.
    Start,
    /// Search goal.
    End,
}

impl Brush {
    /// Brush following this one, wrapping around.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Wall => Self::Hill,
            Self::Hill => Self::Empty,
            Self::Empty => Self::Start,
            Self::Start => Self::End,
            Self::End => Self::Wall,
        }
    }

    /// Cell kind written by the brush.
    pub(crate) const fn kind(self) -> CellKind {
        match self {
            Self::Wall => CellKind::Wall,
            Self::Hill => CellKind::Weighted,
            Self::Empty => CellKind::Empty,
            Self::Start => CellKind::Start,
            Self::End => CellKind::End,
        }
    }

    /// Display name of the brush.
    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Hill => "hill",
            Self::Empty => "eraser",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}
