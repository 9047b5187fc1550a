//! Scene graph vocabulary: ids, beats, exits, menus and outcomes.
//!
//! Scenes are plain data. The story is a static table of [`Scene`] values
//! (see [`crate::script`]) and the engine walks it with an explicit loop.

use std::fmt;

/// Every scene in the story, hub scenes included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SceneId {
    // Hub
    Title,
    MainMenu,
    Background,
    Hints,
    HintOne,
    HintTwo,
    HintThree,
    HintFour,
    HintLoser,
    PointlessInfo,
    About,
    ClearStats,
    Quit,
    PlayGame,

    // Morning
    WakeUp,
    Snooze,
    Snoozing,
    Overslept,
    SmashStereo,
    GetUp,
    Bathroom,
    HoldItIn,
    RelieveSelf,
    EdMcMahon,
    EdMcMahonJackpot,
    EdMcMahonDisgusted,
    Breakfast,
    EatBreakfast,
    WashHands,
    SkipBreakfast,
    Food,
    PopTart,
    FrozenPizza,
    Cereal,
    PackBagMenu,
    PackBag,
    BrushTeeth,
    AfterBrush,
    PackBagTwo,
    LeaveForBus,
    BagPacked,
    HowToBusStop,
    BackToBed,
    WalkToBus,
    RunToBus,
    AtBusStop,
    SitAtBus,
    StandAtBus,
    BusWaiting,
    GetOnBus,
    MoonDriver,
    OnBus,
    SleepOnBus,
    StayAwake,

    // School
    AtSchool,
    RoamHalls,
    Library,
    Study,
    GoOnline,
    WhereOnline,
    CiaGov,
    BlockedSite,
    MySite,
    BellRings,
    ClassMenu,
    WrongClass,
    DebateClass,
    DebateMenu,
    DebateSpeak,
    TeamDebate,
    OriginalOratory,
    DebateDevice,
    DebateDeviceGone,
    DebateDeviceTaken,
    DebateEmail,
    NextClass,
    WrongClassTwo,
    LanguageArts,
    LanguageArtsMenu,
    WriteEssay,
    PlayGameboy,
    LanguageArtsDevice,
    LanguageArtsDeviceGone,
    LanguageArtsDeviceTaken,
    Lunch,
    LunchEat,
    LunchCheck,
    LunchKiss,
    LunchBroke,
    LunchHellNo,
    LunchMenu,
    LunchLibrary,
    LunchPizza,
    LunchBeef,
    LunchChicken,
    AfterLunch,
    LunchOnline,
    LunchNextClass,
    NextClassTwo,
    WrongClassThree,
    NextChemistry,
    Donut,
    DonutYes,
    DonutNo,
    DonutGive,
    DonutRefuse,
    AfterDonut,
    EndOfDay,
    GoToBus,
    BusHome,
    MeetTheGirl,
    WalkAround,
    DreamGirl,
    NoOneInSight,

    // After school
    BusEnd,
    BusGameboy,
    BusCd,
    BusSleep,
    BusTalk,
    BusArrival,
    AfterBus,
    GoHome,
    GoEat,
    StareSun,
    Whistle,
    WhereNow,
    AtAirport,
    AirportHome,
    AirportActions,
    AirportEat,
    AirportBuy,
    AirportBroke,
    AirportRich,
    Ticket,
    Iraq,
    Kyoto,
    Texas,
    TexasMenu,
    TexasGive,
    TexasHero,
    TexasEmptyHanded,
    TexasNo,
    PlaneMenu,
    ScalpTicket,
    BoardPlane,

    // Area 51
    Area51Gate,
    Area51Yes,
    Area51No,
    Area51Book,
    Area51Eat,
    Area51Read,
    Area51Room,
    Area51WrongRoom,
    Area51RightRoom,
    Area51Bathroom,
    Area51Leak,
    Area51Drink,
    Area51Look,
    Area51Nap,
    Area51Vent,
    Area51Courtyard,
    Area51Bite,
    Area51Sing,
    Area51Dance,
    Area51Jokes,
    FinalMenu,
    FinalGiveUp,
    FinalScream,
    FinalDig,
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Predicate over [`crate::GameState`], used by branches and narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Jackpot,
    PantsWet,
    DeviceConfiscated,
    SnoozedOut,
    /// Insisted on going home at least this many times.
    Insisted(u8),
    Not(&'static Condition),
    All(&'static [Condition]),
    Any(&'static [Condition]),
}

/// One step of narration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Beat {
    Say(&'static str),
    /// Wait for the player to press Enter.
    Pause,
    PauseWith(&'static str),
    /// Pacing delay in seconds, before the configured pace is applied.
    Wait(f32),
    When(Condition, &'static [Beat]),
}

/// Consequence of entering a scene, applied after its narration unless it
/// records progress on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Snooze,
    WetPants,
    CollectJackpot,
    ConfiscateDevice,
    InsistOnGoingHome,
    BeginPlaythrough,
    UnlockHint(u8),
    ReportStats,
    ClearProgress,
    Quit,
}

impl Effect {
    /// Applied before the scene's beats so a prompt that never gets an
    /// answer cannot lose it.
    #[must_use]
    pub const fn on_entry(self) -> bool {
        matches!(self, Self::BeginPlaythrough | Self::UnlockHint(_))
    }
}

/// How a terminal scene is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Death(&'static str),
    StandardWin,
    GoodEnding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub target: SceneId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub choices: &'static [Choice],
    /// Whether picking an option counts as a player decision and saves.
    pub counted: bool,
}

/// Where a scene leads once its narration and effects are done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Next(SceneId),
    Branch {
        when: Condition,
        then: SceneId,
        otherwise: SceneId,
    },
    Menu(Menu),
    Outcome(Outcome),
    /// Back to the main menu without scoring anything.
    Return,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub id: SceneId,
    pub beats: &'static [Beat],
    pub effects: &'static [Effect],
    pub exit: Exit,
}

impl Scene {
    /// A scene is terminal when it ends a playthrough with a scored outcome.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.exit, Exit::Outcome(_))
    }

    /// Scenes this one can lead to, in presentation order.
    #[must_use]
    pub fn targets(&self) -> Vec<SceneId> {
        match self.exit {
            Exit::Next(next) => vec![next],
            Exit::Branch {
                then, otherwise, ..
            } => vec![then, otherwise],
            Exit::Menu(menu) => menu.choices.iter().map(|choice| choice.target).collect(),
            Exit::Outcome(_) | Exit::Return => vec![SceneId::MainMenu],
        }
    }
}
