//! The story: every scene of MONDAY as static data.
//!
//! Menus inside a playthrough are counted; hub menus are not. Scene order
//! here follows the day, hub first.
use crate::scene::Beat::{Pause, PauseWith, Say, Wait, When};
use crate::scene::Condition::{
    All, Any, DeviceConfiscated, Insisted, Jackpot, Not, PantsWet, SnoozedOut,
};
use crate::scene::{Choice, Effect, Exit, Menu, Outcome, Scene, SceneId};

macro_rules! scene {
    ($id:ident, [$($beat:expr),* $(,)?], effects [$($effect:expr),* $(,)?], $exit:expr $(,)?) => {
        Scene {
            id: SceneId::$id,
            beats: &[$($beat),*],
            effects: &[$($effect),*],
            exit: $exit,
        }
    };
    ($id:ident, [$($beat:expr),* $(,)?], $exit:expr $(,)?) => {
        scene!($id, [$($beat),*], effects [], $exit)
    };
}

macro_rules! choices {
    ($($label:expr => $target:ident),+ $(,)?) => {
        &[$(Choice { label: $label, target: SceneId::$target }),+]
    };
}

/// Counted story menu.
macro_rules! menu {
    ($title:expr, [$($choices:tt)+]) => {
        Exit::Menu(Menu { title: $title, choices: choices!($($choices)+), counted: true })
    };
}

/// Uncounted hub menu.
macro_rules! hub_menu {
    ($title:expr, [$($choices:tt)+]) => {
        Exit::Menu(Menu { title: $title, choices: choices!($($choices)+), counted: false })
    };
}

macro_rules! next {
    ($id:ident) => {
        Exit::Next(SceneId::$id)
    };
}

macro_rules! branch {
    ($when:expr => $then:ident, else $otherwise:ident) => {
        Exit::Branch { when: $when, then: SceneId::$then, otherwise: SceneId::$otherwise }
    };
}

macro_rules! death {
    ($cause:literal) => {
        Exit::Outcome(Outcome::Death($cause))
    };
}

const ROLL_CREDITS: &str = "Press Enter to roll the credits...";

/// Rolled after a win, one line at a time.
pub static CREDITS: &[&str] = &[
    "",
    "                  CREDITS",
    "",
    "               STORY   EVERETT, DIEGO",
    "         PROGRAMMING   EVERETT, DIEGO",
    "          PRODUCTION   EVERETT",
    "         IMAGINATION   EVERETT, DIEGO, ANDRE",
    "       TECH. SUPPORT   DIEGO",
    "ENTICING DEATH SCENE   DIEGO",
    "      SADISTIC HUMOR   EVERETT, DIEGO",
    "        PLAY-TESTING   LAZ, JOHN, JENNIFER, ERIC, DEBORA, ANDRES, JOHN, MOLLY, JEFF",
    "                       HELYETT, NATHAN, GREG, SEAN, CHRIS, MARCO, KELLY AND PEDRO",
    " SENIOR PLAY-TESTERS   ANDRE \"MR. BOOMBASTIC\" OLIVEIRA",
    " SENIOR PLAY-TESTERS   DIEGO \"THE MASTER\"",
    "          CREATED IN   TI-83 BASIC",
    "           2025 PORT   DIEGO",
    "",
    "           COPYRIGHT   2001",
    "",
    "                THE END?",
];

pub static SCRIPT: &[Scene] = &[
    // Hub ------------------------------------------------------------------
    scene!(Title, [
        Say("\nA MODERN ADVENTURE OF EPIC PROPORTIONS\n"),
        Wait(1.5),
        Say("    {}{}{}{}{}{}{}{}{}{}{}\n   {{{{{{{{ MONDAY }}}}}}}}\n    {}{}{}{}{}{}{}{}{}{}{}\n"),
        Wait(1.5),
        Say("       SPECIAL EDITION\n\n"),
        Wait(1.5),
        Pause,
    ], next!(MainMenu)),
    scene!(MainMenu, [], hub_menu!("-----MONDAY-----", [
        "PLAY GAME" => PlayGame,
        "BACKGROUND" => Background,
        "HINTS" => Hints,
        "POINTLESS INFO" => PointlessInfo,
        "ABOUT" => About,
        "CLEAR STATS" => ClearStats,
        "QUIT GAME" => Quit,
    ])),
    scene!(Background, [
        Say("YOU ARE A HIGH SCHOOL STUDENT IN THE LATE 90'S."),
        Wait(2.0),
        Say("AND IT IS THE WORST DAY OF THE WEEK."),
        Wait(2.0),
        Say("MONDAY.\n"),
        Wait(2.0),
        Say("\"YOU\" REFERS TO YOUR CHARACTER."),
        Wait(2.0),
        Say("\"ME\" OR \"I\" REFERS TO ME, THE PROGRAMMER."),
        Wait(2.0),
        Say("THE GAME IS EXTREMELY LONG AND CHALLENGING, SO DON'T GIVE UP."),
        Wait(3.0),
        Say("SOME OF THE CHARACTERS ARE FICTIONAL, BUT SOME ARE BASED ON OR ARE REAL PEOPLE, SOME ARE WELL-KNOWN."),
        Wait(4.3),
        Say("IT SEEMS LIKE THE WHOLE WORLD IS AGAINST YOU.\n"),
        Wait(5.0),
        Say("IS IT?"),
        Wait(2.0),
        Pause,
    ], Exit::Return),
    scene!(Hints, [], hub_menu!("  WANT A HINT?  ", [
        "YES" => HintOne,
        "NO" => MainMenu,
    ])),
    scene!(HintOne, [
        Say("KEEP THIS IN MIND:"),
        Pause,
        Say("YOU WON'T ALWAYS FIND OUT IF YOU MADE THE WRONG CHOICE RIGHT AWAY."),
        Pause,
        Say("SOME DECISIONS WON'T AFFECT YOU UNTIL LATER ON."),
        Pause,
        Say("...MUHUWAHAHAHA"),
        Wait(1.0),
    ], effects [Effect::UnlockHint(1)], hub_menu!("WANT MORE HINTS?", [
        "YEA" => HintTwo,
        "NOPE" => MainMenu,
    ])),
    scene!(HintTwo, [
        Say("PERSEVERANCE AND GRIT ARE GOOD QUALITIES."),
        Wait(1.0),
    ], effects [Effect::UnlockHint(2)], hub_menu!("MORE HINTS?", [
        "YES PLEASE" => HintThree,
        "NO, I'LL FLEX MY GRIT" => MainMenu,
    ])),
    scene!(HintThree, [
        Say("SOME CHOICES ARE NOT AS OBVIOUS AS THEY SEEM."),
        Pause,
        Say("SOMETIMES YOU HAVE TO THINK OUTSIDE THE BOX."),
        Pause,
        Say("OR MAYBE JUST THINK AT ALL."),
        Wait(2.0),
    ], effects [Effect::UnlockHint(3)], hub_menu!("EVEN MORE HINTS?", [
        "YEA, I'M DESPERATE" => HintFour,
        "NAW DUDE, I'M GOOD" => MainMenu,
    ])),
    scene!(HintFour, [
        Say("MONEY IS THE ROOT OF ALL THAT KILLS."),
        Wait(3.0),
    ], effects [Effect::UnlockHint(4)], hub_menu!("WANT EVEN MORE HINTS!? HMM???", [
        "YES, JUST SPOON FEED ME PLEASE" => HintLoser,
        "NO, I WILL THINK FOR MYSELF. THANKS" => MainMenu,
    ])),
    scene!(HintLoser, [Say("NO MORE HINTS FOR YOU! LOSER.\n"), Pause], Exit::Return),
    scene!(PointlessInfo, [], effects [Effect::ReportStats], Exit::Return),
    scene!(About, [
        Say("\n    ^o^^o^^o^^o^^o MONDAY o^^o^^o^^o^^o^^o^^\n         ---------------------------\n              A TEXT ADVENTURE\n                FOR THE TI-83\n         ---------------------------\n               EBG1@JUNO.COM\n         ---------------------------\n     HTTP://WWW.GEOCITIES.COM/EVERETT710"),
        PauseWith("Press Enter to see credits..."),
    ], Exit::Outcome(Outcome::StandardWin)),
    scene!(ClearStats, [], effects [Effect::ClearProgress], Exit::Return),
    scene!(Quit, [], effects [Effect::Quit], Exit::Return),

    // Morning --------------------------------------------------------------
    scene!(PlayGame, [
        Say("YOU'RE IN BED, ASLEEP."),
        Pause,
        Say("IT'S 5:15 A.M."),
        Pause,
        Say("YOUR STEREO TURNS ON AND A LOCAL RADIO STATION IS PLAYING A SONG BY PRINCE."),
        Pause,
        Say("WHAT A BAD WAY TO START A DAY!"),
        Pause,
    ], effects [Effect::BeginPlaythrough], next!(WakeUp)),
    scene!(WakeUp, [], menu!("  YOU WAKE UP   ", [
        "SNOOZE" => Snooze,
        "GET UP" => GetUp,
        "SMASH STEREO" => SmashStereo,
    ])),
    scene!(Snooze, [], branch!(SnoozedOut => Overslept, else Snoozing)),
    scene!(Snoozing, [Say("ZZZZZ..."), Pause], effects [Effect::Snooze], next!(WakeUp)),
    scene!(Overslept, [
        Say("YOU OVERSLEPT\nYOU MISS YOUR BUS AND YOU TRY TO WALK TO SCHOOL.\nOF COURSE YOU DON'T MAKE IT!\nWHAT KIND OF GAME DO YOU THINK THIS IS?!?"),
    ], death!("oversleeping")),
    scene!(SmashStereo, [
        Say("YOU GRAB YOUR BASEBALL BAT AND BEGIN DESTROYING YOUR STEREO.\nIT IS NOW A PILE OF SPARE PARTS.\nBUT YOU FORGOT ABOUT YOUR FRIEND'S CD.\nAND HIS DAD IS A MOB KINGPIN!\nOH CRAP"),
    ], death!("mob_hit")),
    scene!(GetUp, [
        Say("YOU GET UP AND STRETCH. AS YOU TAKE A DEEP BREATH, FOULNESS INVADES YOUR NOSTRILS. THE FOULNESS COULD ONLY BE CAUSED BY ONE THING. ITS MONDAY. BUT YOU REALLY, REALLY GOTTA GO!"),
        Pause,
    ], next!(Bathroom)),
    scene!(Bathroom, [], menu!("   DO YOU GO?   ", [
        "RELIEVE SELF" => RelieveSelf,
        "HOLD IT IN" => HoldItIn,
    ])),
    scene!(HoldItIn, [Say("YOU WET YOUR PANTS."), Pause], effects [Effect::WetPants], next!(EdMcMahon)),
    scene!(RelieveSelf, [Say("AHHHHH..."), Pause], next!(EdMcMahon)),
    scene!(EdMcMahon, [], branch!(PantsWet => EdMcMahonDisgusted, else EdMcMahonJackpot)),
    scene!(EdMcMahonJackpot, [
        Say("ED MCMAHON SHOWS UP AT YOUR DOOR TO SAY THAT YOU'VE WON 10 MILLION BUCKS. WHOO-HOO! YOU STUFF THE ENTIRE 10 MILLION BUCKS IN YOUR POCKET."),
        Pause,
    ], effects [Effect::CollectJackpot], next!(Breakfast)),
    scene!(EdMcMahonDisgusted, [
        Say("ED MCMAHON SHOWS UP AT YOUR DOOR TO SAY THAT YOU'VE WON 10 MILLION BUCKS. HE SEES YOUR PANTS AND IS DISGUSTED. HE TAKES BACK THE MONEY."),
        Pause,
    ], next!(Breakfast)),
    scene!(Breakfast, [], menu!("   NOW WHAT?    ", [
        "EAT BREAKFAST" => EatBreakfast,
        "WASH HANDS" => WashHands,
        "GO TO BUS STOP" => SkipBreakfast,
    ])),
    scene!(EatBreakfast, [
        Say("YOU DIDN'T WASH YOUR HANDS. THAT'S SICK! THE GERMS EVENTUALLY OVERRUN YOU."),
    ], death!("unwashed_breakfast")),
    scene!(WashHands, [
        Say("YOU WASHED YOUR HANDS. GOOD JOB YOU'RE NOT NEARLY AS UNSANITARY AS I THOUGHT!"),
        Pause,
        Say("YOU ARE HUNGRY, SO YOU HAVE BREAKFAST."),
        Pause,
    ], next!(Food)),
    scene!(SkipBreakfast, [
        Say("BREAKFAST IS THE MOST IMPORTANT MEAL OF THE DAY! BUT YOU SKIPPED IT, NOW DID YOU?"),
    ], death!("skip_breakfast")),
    scene!(Food, [], menu!("    EAT WHAT?   ", [
        "POP-TART" => PopTart,
        "FROZEN PIZZA" => FrozenPizza,
        "CEREAL" => Cereal,
    ])),
    scene!(PopTart, [
        Say("IT IS STUCK IN THE TOASTER SO YOU TRY TO PRY IT OUT WITH A FORK. METAL CONDUCTS ELECTRICITY, FOOL!"),
    ], death!("electrocution")),
    scene!(FrozenPizza, [Say("YOU FORGET TO DEFROST IT AND BREAK YOUR JAW.")], death!("broken_jaw")),
    scene!(Cereal, [Say("YUM!"), Pause], next!(PackBagMenu)),
    scene!(PackBagMenu, [], menu!("   NOW WHAT?    ", [
        "PACK BAG" => PackBag,
        "BRUSH TEETH" => BrushTeeth,
    ])),
    scene!(PackBag, [Say("DISGUSTING! YOU DIDN'T BRUSH YOUR TEETH!")], death!("no_hygiene")),
    scene!(BrushTeeth, [
        Say("YOU RINSE OFF WHAT APPEARS TO BE CYANIDE, AND BRUSH..."),
        Pause,
    ], next!(AfterBrush)),
    scene!(AfterBrush, [], menu!("    AND NOW?    ", [
        "PACK BAG" => PackBagTwo,
        "LEAVE FOR BUS" => LeaveForBus,
    ])),
    scene!(PackBagTwo, [
        Say("DON'T FORGET YOUR TI-83, GAMEBOY AND CD PLAYER. ONLY WHAT'S NECESSARY."),
        Pause,
    ], next!(BagPacked)),
    scene!(LeaveForBus, [
        Say("YOU FORGOT YOUR STUFF! YOU GET ALL F'S AND DON'T GO TO COLLEGE, NEVER GET A JOB AND STARVE TO DEATH."),
    ], death!("starvation")),
    scene!(BagPacked, [], menu!("   BAG PACKED.   ", [
        "GO TO BUS STOP" => HowToBusStop,
        "BACK TO BED" => BackToBed,
    ])),
    scene!(HowToBusStop, [], menu!("HOW TO GET THERE", [
        "WALK" => WalkToBus,
        "RUN" => RunToBus,
    ])),
    scene!(BackToBed, [
        Say("YOU GO BACK TO YOUR ROOM. THERE IS A PSYCHO WAITING FOR YOU... WEARING A RUBBER MASK..."),
    ], death!("psycho")),
    scene!(WalkToBus, [Say("YOU GET TO THE BUS STOP."), Pause], next!(AtBusStop)),
    scene!(RunToBus, [Say("YOU FORGET TO LOOK BOTH WAYS.")], death!("car_accident")),
    scene!(AtBusStop, [], menu!("AT THE BUS STOP ", [
        "SIT" => SitAtBus,
        "STAND" => StandAtBus,
    ])),
    scene!(SitAtBus, [
        Say("A CAR RUNS YOU DOWN. WHY? YOU SAT IN THE WET CEMENT THAT SOME JOKER LEFT AND YOU WERE UNABLE TO AVOID A CAR DRIVING ON THE SIDEWALK."),
    ], death!("cement")),
    scene!(StandAtBus, [
        Say("AN 18-WHEELER NEARLY RUNS YOU DOWN. GOOD THING YOU ARE VERY AGILE."),
        Pause,
    ], next!(BusWaiting)),
    scene!(BusWaiting, [Say("THE BUS COMES."), Pause], menu!("  IT'S WAITING  ", [
        "GET ON" => GetOnBus,
        "MOON DRIVER" => MoonDriver,
    ])),
    scene!(GetOnBus, [Say("YOU'RE ON THE BUS."), Pause], next!(OnBus)),
    scene!(MoonDriver, [Say("THE DRIVER RUNS YOU DOWN OUT OF SPITE.")], death!("spiteful_driver")),
    scene!(OnBus, [], menu!("   ON THE BUS   ", [
        "SLEEP" => SleepOnBus,
        "STAY AWAKE" => StayAwake,
    ])),
    scene!(SleepOnBus, [Say("YOU WAKE UP IN A BAD NEIGHBORHOOD...")], death!("bad_neighborhood")),
    scene!(StayAwake, [Say("YOU FINALLY ARRIVE AT SCHOOL"), Pause], next!(AtSchool)),

    // School ---------------------------------------------------------------
    scene!(AtSchool, [], menu!("   AT SCHOOL    ", [
        "ROAM HALLS" => RoamHalls,
        "GO TO LIBRARY" => Library,
    ])),
    scene!(RoamHalls, [Say("YOU GET LOST, NEVER TO BE SEEN AGAIN.")], death!("lost_forever")),
    scene!(Library, [Say("YOU'RE IN THE LIBRARY."), Pause], menu!("   IN LIBRARY   ", [
        "STUDY" => Study,
        "GO ONLINE" => GoOnline,
    ])),
    scene!(Study, [Say("YOUR BRAIN OVERHEATS...")], death!("brain_overheat")),
    scene!(GoOnline, [Say("YOU GO ONLINE."), Pause], next!(WhereOnline)),
    scene!(WhereOnline, [], menu!("   WHERE TO?    ", [
        "CIA.GOV" => CiaGov,
        "SKETCHY SITE" => BlockedSite,
        "MY SITE" => MySite,
    ])),
    scene!(CiaGov, [
        Say("YOU MISTAKENLY FIND GOVERNMENT SECRETS AND YOU ARE LATER KILLED \"ACCIDENTALLY\". WHEN AN ANVIL IS DROPPED ON YOUR HEAD."),
    ], death!("anvil")),
    scene!(BlockedSite, [Say("IT'S BLOCKED BY SURFWATCH!"), Pause], next!(WhereOnline)),
    scene!(MySite, [Say("YOU WENT TO MY SITE! GOOD FOR YOU!"), Pause], next!(BellRings)),
    scene!(BellRings, [Say("THE BELL RINGS."), Pause], next!(ClassMenu)),
    scene!(ClassMenu, [], menu!("   WHERE TO?    ", [
        "CHEMISTRY" => WrongClass,
        "PRE-CAL" => WrongClass,
        "DEBATE" => DebateClass,
    ])),
    scene!(WrongClass, [Say("WRONG CLASS!"), Pause], next!(BellRings)),
    scene!(DebateClass, [Say("YOU'RE IN DEBATE"), Pause], next!(DebateMenu)),
    scene!(DebateMenu, [], menu!("    DO YOU...   ", [
        "SPEAK" => DebateSpeak,
        "PLAY TI-83" => DebateDevice,
        "CHECK E-MAIL" => DebateEmail,
    ])),
    scene!(DebateSpeak, [], menu!("  CHOOSE EVENT  ", [
        "TEAM DEBATE" => TeamDebate,
        "ORIGINAL ORATORY" => OriginalOratory,
    ])),
    scene!(TeamDebate, [
        Say("YOU CHOOSE TEAM DEBATE."),
        Pause,
        Say("YOU SPEAK AS FAST AS YOU POSSIBLY CAN."),
        Pause,
        Say("BUT SOMEWHERE ALONG THE WAY, YOU CHOKE ON YOUR TONGUE."),
    ], death!("choked_tongue")),
    scene!(OriginalOratory, [
        Say("YOU CHOOSE ORIGINAL ORATORY"),
        Pause,
        Say("AND REALIZE YOU FORGOT TO WRITE SOMETHING ***ORIGINAL***."),
        Pause,
        Say("SO YOU USE THE 'I HAVE A DREAM' SPEECH."),
        Pause,
        Say("NO ONE NOTICES."),
        Pause,
        Say("THE BELL RINGS."),
        Pause,
    ], next!(NextClass)),
    scene!(
        DebateDevice,
        [],
        branch!(DeviceConfiscated => DebateDeviceGone, else DebateDeviceTaken),
    ),
    scene!(DebateDeviceGone, [Say("YOU DON'T HAVE IT!"), Pause], next!(DebateClass)),
    scene!(DebateDeviceTaken, [
        Say("THE TEACHER CONFISCATES IT!"),
        Pause,
    ], effects [Effect::ConfiscateDevice], next!(DebateClass)),
    scene!(DebateEmail, [
        Say("YOU CHECK YOUR E-MAIL. AND THE COMPUTER EXPLODES."),
    ], death!("computer_explosion")),
    scene!(NextClass, [], menu!("   WHERE TO?    ", [
        "ENGINEERING" => WrongClassTwo,
        "LANGUAGE ARTS" => LanguageArts,
        "CHEMISTRY" => WrongClassTwo,
    ])),
    scene!(WrongClassTwo, [Say("WRONG CLASS, FOOL"), Pause], next!(NextClass)),
    scene!(LanguageArts, [Say("YOU'RE IN LANGUAGE ARTS."), Pause], next!(LanguageArtsMenu)),
    scene!(LanguageArtsMenu, [], menu!("  LANGUAGE ARTS ", [
        "WRITE ESSAY" => WriteEssay,
        "PLAY GAMEBOY" => PlayGameboy,
        "PLAY TI-83" => LanguageArtsDevice,
    ])),
    scene!(WriteEssay, [
        Say("YOU WRITE A KILLER ESSAY. TIME FOR THE FINISHING TOUCHES."),
        Pause,
        Say("T...H...E..."),
        Say("E...N..."),
        Pause,
        Say("AND YOUR HAND FALLS OFF. OWW!"),
    ], death!("hand_falls_off")),
    scene!(PlayGameboy, [
        Say("YOU PLAY YOUR GAME BOY ALL PERIOD. COOL."),
        Pause,
        Say("THE BELL RINGS."),
        Pause,
    ], next!(Lunch)),
    scene!(
        LanguageArtsDevice,
        [],
        branch!(DeviceConfiscated => LanguageArtsDeviceGone, else LanguageArtsDeviceTaken),
    ),
    scene!(LanguageArtsDeviceGone, [Say("IT WAS ALREADY CONFISCATED."), Pause], next!(LanguageArts)),
    scene!(LanguageArtsDeviceTaken, [
        Say("THE TEACHER CONFISCATES IT."),
        Pause,
    ], effects [Effect::ConfiscateDevice], next!(LanguageArts)),
    scene!(Lunch, [], menu!("     LUNCH      ", [
        "EAT" => LunchEat,
        "GO TO LIBRARY" => LunchLibrary,
    ])),
    scene!(LunchEat, [
        Say("A REALLY REALLY CUTE GIRL FROM YOUR HOMEROOM ASKS TO BORROW 10 BUCKS."),
        Pause,
    ], menu!("   SAY WHAT?    ", [
        "LET ME CHECK" => LunchCheck,
        "HELL NO!" => LunchHellNo,
    ])),
    scene!(LunchCheck, [], branch!(Jackpot => LunchKiss, else LunchBroke)),
    scene!(LunchKiss, [
        Say("*KISS* THANKS! :) :) :) :) :)"),
        Pause,
        Say("SHE ASKS YOU TO MEET HER AFTER SCHOOL."),
        Pause,
        Say("YES!"),
    ], next!(LunchMenu)),
    scene!(LunchBroke, [Say("OH, NO MONEY? AWWW... TOO BAD!")], next!(LunchMenu)),
    scene!(LunchHellNo, [
        Say("OKAY, SHE SAYS SADLY."),
        Pause,
        Say("HOW DUMB CAN YOU POSSIBLY BE???"),
    ], death!("reject_girl")),
    scene!(LunchMenu, [Pause], menu!("   EAT WHAT?    ", [
        "CHICKEN" => LunchChicken,
        "BEEF TACO" => LunchBeef,
        "PIZZA" => LunchPizza,
    ])),
    scene!(LunchLibrary, [
        Say("YOU GO TO THE LIBRARY."),
        Pause,
        Say("SOMEONE RELEASED POISONOUS METHANE GAS IN THE LIBRARY."),
        Pause,
        Say("YOU CHOKE ON YOUR FINAL BREATH OF AIR."),
    ], death!("methane_gas")),
    scene!(LunchPizza, [Say("YUM!"), Pause], next!(AfterLunch)),
    scene!(LunchBeef, [Say("MAD COW DISEASE...?")], death!("mad_cow")),
    scene!(LunchChicken, [Say("HMM... SALMONELLA...?")], death!("salmonella")),
    scene!(AfterLunch, [], menu!("   WHERE TO?    ", [
        "GO ONLINE" => LunchOnline,
        "NEXT CLASS" => LunchNextClass,
    ])),
    scene!(LunchOnline, [Say("THE SCREEN FLASHES AND YOU HAVE A SEIZURE.")], death!("seizure")),
    scene!(LunchNextClass, [Say("WALKING TO NEXT CLASS."), Pause], next!(NextClassTwo)),
    scene!(NextClassTwo, [], menu!("  NEXT CLASS?   ", [
        "ENGINEERING" => WrongClassThree,
        "CHEMISTRY" => NextChemistry,
        "HISTORY" => WrongClassThree,
    ])),
    scene!(WrongClassThree, [Say("WRONG CLASS, FOOL"), Pause], next!(NextClassTwo)),
    scene!(NextChemistry, [
        Say("AS YOU ARE WALKING, YOU HEAR A LOUD CRASHING NOISE."),
        Pause,
        Say("YOU DIVE OUT OF THE WAY, AND THE ANVIL DROPS WITHOUT CASUALTY ONTO THE SPOT WHERE YOU WERE."),
        Pause,
        Say("WAIT!!"),
        Wait(0.5),
        Say("AN ANVIL?!?!"),
        Pause,
        Say("YOU MAKE IT TO CLASS IN ONE PIECE."),
        Pause,
        Say("BUT YOU ARE FEELING DROWSY. YOU NEED SUGAR."),
        Pause,
    ], next!(Donut)),
    scene!(Donut, [], menu!("  BUY A DONUT?  ", [
        "YES" => DonutYes,
        "NO" => DonutNo,
    ])),
    scene!(DonutYes, [
        Say("THE SCHOOL'S FOOTBALL TEAM'S BIGGEST LINEBACKER LOOKS AT YOU MENACINGLY."),
        Pause,
    ], menu!("    GIVE IT?    ", [
        "YES" => DonutGive,
        "NO" => DonutRefuse,
    ])),
    scene!(DonutNo, [Say("YOU FALL ASLEEP WITH YOUR FACE IN HYDROCHLORIC ACID!")], death!("acid_face")),
    scene!(DonutGive, [
        Say("YOU HAND IT TO HIM. HE EATS IT. BEFORE HE CAN BEAT YOU DOWN, HE CHOKES ON THE DONUT AND DIES."),
        Pause,
        Say("YOU SEARCH HIS POCKETS AND FIND A PACKET OF PURE SUGAR. OKAY."),
        Pause,
        Say("WHY LET IT GO TO WASTE. HE WON'T NEED IT ANYMORE."),
        Pause,
    ], next!(AfterDonut)),
    scene!(DonutRefuse, [
        Say("WHAT HAPPENS NEXT? I'LL LEAVE THAT TO YOUR IMAGINATION..."),
    ], death!("refused_donut")),
    scene!(AfterDonut, [Say("IT WASN'T YOUR FAULT HE HAD TERRIBLE KARMA."), Pause], next!(EndOfDay)),
    scene!(EndOfDay, [], menu!("THE DAY'S OVER! ", [
        "WALK AROUND" => WalkAround,
        "GO TO BUS" => GoToBus,
    ])),
    // With the jackpot the game nags twice before letting you take the bus.
    scene!(GoToBus, [], branch!(Any(&[Not(&Jackpot), Insisted(2)]) => BusHome, else MeetTheGirl)),
    scene!(BusHome, [
        When(Insisted(2), &[Say("FINE. YOU'RE ON THE BUS...")]),
        When(Not(&Insisted(2)), &[Say("YOU'RE ON THE BUS...")]),
        Pause,
    ], next!(BusEnd)),
    scene!(MeetTheGirl, [
        When(Insisted(1), &[Say("ARE YOU SERIOUS? GO MEET THE GIRL, FOOL!!!")]),
        When(Not(&Insisted(1)), &[Say("GO MEET THE GIRL, FOOL!!!")]),
        Pause,
    ], effects [Effect::InsistOnGoingHome], next!(EndOfDay)),
    scene!(WalkAround, [], branch!(Jackpot => DreamGirl, else NoOneInSight)),
    scene!(DreamGirl, [
        Say("YOU MEET UP WITH THE GIRL FROM LUNCH."),
        Pause,
        Say("SHE'S SIGNALING FOR YOU TO FOLLOW HER INTO THE JANITOR'S CLOSET."),
        Pause,
        Say("SHE LOOKS LIKE YOUR DREAM GIRL!!!"),
        Pause,
        Say("AS SOON AS YOU GET WITHIN REACHING DISTANCE..."),
        Pause,
        Say("SHE LEANS IN AND..."),
        Pause,
        Say("YOU ARE BOTH RUN DOWN BY A HERD OF RAGING BUFFALO."),
    ], death!("buffalo_stampede")),
    scene!(NoOneInSight, [
        Say("THERE IS NO ONE IN SIGHT."),
        Pause,
        Say("YOU MISSED THE BUS AND TRY TO MAKE THE 10 MILE WALK HOME."),
        Pause,
        Say("YOU ARE ALMOST HOME, BUT YOU ARE ABDUCTED BY ALIENS."),
    ], death!("alien_abduction")),

    // After school ---------------------------------------------------------
    scene!(BusEnd, [], menu!("   ON THE BUS   ", [
        "PLAY GAMEBOY" => BusGameboy,
        "LISTEN TO CD" => BusCd,
        "SLEEP" => BusSleep,
        "TALK TO PEOPLE" => BusTalk,
    ])),
    scene!(BusGameboy, [
        Say("YOU PLAY YOUR GAMEBOY."),
        Pause,
        Say("YOU ARE MOMENTS AWAY FROM BEATING ZELDA: LINK'S AWAKENING"),
        Pause,
        Say("BUT YOUR BATTERIES DIE."),
        Pause,
        Say("YOU GET REALLY, REALLY TICKED OFF."),
        Pause,
        Say("YOUR PULSE RISES TO 400 BEATS PER MINUTE."),
    ], death!("gameboy_rage")),
    scene!(BusCd, [
        Say("YOU LISTEN TO A CD, AND SOMETHING WEIRD HAPPENS."),
        Pause,
        Say("YOU GET THE URGE TO JUMP OUT OF THE MOVING BUS."),
        Pause,
        Say("BUT WHY? IT SEEMS SOME JOKER REPLACED YOUR GREEN DAY CD WITH THE SOUNDTRACK FROM ANNIE."),
    ], death!("annie_cd")),
    scene!(BusSleep, [
        Say("YOU LOOK OUT THE WINDOW AND SEE A BILLBOARD WITH THE GIRL FROM LUNCH ON IT."),
        Pause,
        Say("IT'S ABOUT SINGLES IN YOUR AREA AND SHE'S MAKING A PEACE SIGN. STRANGE."),
        Pause,
        Say("WAIT, SHE'S A MODEL?"),
        Pause,
        Say("OH CRUD, YOU FORGOT TO MEET HER AFTER SCHOOL!"),
        Pause,
        Say("YOU FALL ASLEEP KICKING YOURSELF. THEN YOU WAKE UP."),
        Pause,
        Say("HEY, IT WORKS FOR ME ALL THE TIME!"),
        Pause,
    ], next!(BusArrival)),
    scene!(BusTalk, [
        Say("YOU WALK ON THE BUS AND TRY TO SAY \"WHATS UP\""),
        Pause,
        Say("BUT IT COMES OUT SOUNDING LIKE..."),
        Pause,
        Say("\"ALL OF YOUR MOTHERS WEAR ARMY BOOTS.\""),
        Pause,
        Say("THEN THEY THROW YOU OUT THE WINDOW."),
        Pause,
        Say("FOR NO APPARENT REASON."),
    ], death!("bus_window")),
    scene!(BusArrival, [Say("THE BUS GETS TO YOUR STOP AND YOU GET OUT."), Pause], next!(AfterBus)),
    scene!(AfterBus, [], menu!("    WHAT NOW?   ", [
        "GO HOME" => GoHome,
        "WHISTLE" => Whistle,
        "GO TO EAT" => GoEat,
        "STARE AT SUN" => StareSun,
    ])),
    scene!(GoHome, [Say("I SHOULD SMACK YOU FOR THINKING OF GOING RIGHT HOME!")], death!("quit_early")),
    scene!(GoEat, [
        Say("YOU GO TO MCDONALDS."),
        Pause,
        Say("YOU EAT ONE FRY. ONE FRY TOO MANY. THE GREASE CLOGS YOUR ARTERIES AND YOU HAVE A HEART ATTACK."),
    ], death!("mcdonalds_fry")),
    scene!(StareSun, [
        Say("YOU STARE AT THE SUN."),
        Pause,
        Say("YOUR RETINAS BURN AS YOU ARE CROSSING THE STREET AND YOU ARE BLINDED."),
    ], death!("sun_blindness")),
    scene!(Whistle, [
        Say("YOU WHISTLE A HAPPY TUNE."),
        Pause,
        Say("SOMEONE HIRED A HITMAN TO KILL YOU. HE HEARS YOU WHISTLING AND BEGINS TO WHISTLE ALONG."),
        Pause,
        Say("HE FORGETS TO KILL YOU AND WALKS ALONG ON HIS MERRY 'OLE WAY."),
        Pause,
        Say("OKAY, WHATEVER."),
        Pause,
    ], next!(WhereNow)),
    scene!(WhereNow, [], menu!("   WHERE NOW?   ", [
        "THE AIRPORT" => AtAirport,
        "HOME" => AirportHome,
    ])),
    scene!(AtAirport, [Say("YOU GO TO THERE."), Pause], next!(AirportActions)),
    scene!(AirportHome, [Say("YOU'RE KIDDING.")], death!("airport_quit")),
    scene!(AirportActions, [], menu!(" AT THE AIRPORT ", [
        "GO EAT" => AirportEat,
        "BUY TICKET" => AirportBuy,
    ])),
    scene!(AirportEat, [
        Say("YOU EAT A TUNA SANDWICH THEN REALIZE THAT THE TUNA'S NOT DEAD YET..."),
    ], death!("live_tuna")),
    scene!(AirportBuy, [], branch!(Jackpot => AirportRich, else AirportBroke)),
    scene!(AirportBroke, [
        Say("YOU HAVE NO CASH."),
        Pause,
        Say("YOU SEE A CREDIT CARD ON THE FLOOR."),
        Pause,
        Say("ITS TED TURNER'S!"),
        Pause,
        Say("YOU BUY A TICKET"),
        Pause,
    ], next!(Ticket)),
    scene!(AirportRich, [
        Say("WHY NOT. YOU HAVE ALL THIS MONEY TO BURN."),
        Pause,
    ], next!(Ticket)),
    scene!(Ticket, [], menu!("     WHERE?     ", [
        "IRAQ" => Iraq,
        "KYOTO" => Kyoto,
        "TEXAS" => Texas,
    ])),
    scene!(Iraq, [
        Say("YOU GO TO IRAQ."),
        Pause,
        Say("YOU MEET SADDAM HUSSEIN."),
        Pause,
        Say("HE THINKS YOU'RE AN ASSASSIN AND THE GUARDS TAKE YOU OUT."),
    ], death!("iraq_guards")),
    scene!(Kyoto, [
        Say("YOU VISIT NINTENDO HQ IN KYOTO."),
        Pause,
        Say("YOU TRY TO STEAL A GAME BOY ADVANCE PROTOTYPE"),
        Pause,
        Say("DONKEY KONG STOPS YOU, AND TOSSES YOU INTO OBLIVION."),
    ], death!("donkey_kong")),
    scene!(Texas, [
        Say("YOU GO TO TEXAS. YOU WALK AROUND THE STREETS."),
        Pause,
        Say("THERE IS A PSYCHOTIC THERE WHO HAS JUST TAKEN A HOSTAGE."),
        Pause,
        Say("HE IS DEMANDING... A TI-83???"),
        Pause,
    ], next!(TexasMenu)),
    scene!(TexasMenu, [], menu!("GIVE HIM YOURS? ", [
        "YES" => TexasGive,
        "NO" => TexasNo,
    ])),
    scene!(TexasGive, [], branch!(DeviceConfiscated => TexasEmptyHanded, else TexasHero)),
    scene!(TexasHero, [
        Say("YOU GIVE HIM YOUR TI-83. HE LETS THE HOSTAGE GO AND RUNS AWAY."),
        Pause,
        Say("THE HOSTAGE WAS THE PRESIDENT OF TEXAS INSTRUMENTS!"),
        Pause,
        Say("HE TAKES YOU TO THE COMPANY BUILDING AND GIVES YOU A TI-83 PLUS."),
        Pause,
        Say("EXCELLENT! *GUITAR RIFF*"),
        Pause,
        Say("YOU TAKE IT AND START TO LEAVE, BUT HE'S NOT DONE YET."),
        Pause,
        Say("HE GIVES YOU A PLANE TICKET HOME, ON A TOP SECRET CONCORDE."),
        Pause,
        Say("FLIGHT AT THE SPEED OF LIGHT!"),
        Pause,
        Say("THEN YOU LEAVE."),
        Pause,
    ], next!(PlaneMenu)),
    scene!(TexasEmptyHanded, [
        Say("YOU REACH INTO YOUR BACKPACK AND COME UP EMPTY."),
        Pause,
        Say("UH-OH..."),
    ], death!("hostage_fail")),
    scene!(TexasNo, [
        Say("YOU RUN AWAY, BUT YOUR BAD KARMA CATCHES UP WITH YOU..."),
    ], death!("texas_karma")),
    scene!(PlaneMenu, [], menu!("  DO WHAT NOW?  ", [
        "SCALP TICKET" => ScalpTicket,
        "BOARD PLANE" => BoardPlane,
    ])),
    scene!(ScalpTicket, [
        Say("YOU SELL THE TICKET AND MAKE SOME MONEY, BUT YOU ARE STRANDED IN TEXAS!"),
        Pause,
        Say("YOU TRY WALKING HOME, BUT YOU OBVIOUSLY DON'T MAKE IT."),
    ], death!("walk_texas")),
    scene!(BoardPlane, [
        Say("YOU EXCITEDLY BOARD THE PLANE TO GO HOME BUT PROMPTLY FALL ASLEEP."),
        Pause,
        Say("ZZZZZ..."),
        Pause,
        Say("YOU WAKE UP SUDDENLY AND REALIZE THE PLANE HAS CRASHED AND IS ON FIRE."),
        Pause,
        Say("YOU ESCAPE, AND REALIZE THAT YOU'RE THE ONLY SURVIVOR."),
        Pause,
        Say("YOU KNOW WHY?"),
        Pause,
        Say("BECAUSE YOU HAD YOUR TRAY TABLE UP, AND YOUR SEAT BACK IN THE FULL, UPRIGHT POSITION."),
        Pause,
        Say("YOU CRAWL FROM THE TWISTED, BURNING WRECKAGE AND LOOK AROUND."),
        Pause,
        When(Any(&[Jackpot, Not(&DeviceConfiscated)]), &[
            Say("SEEMS LIKE YOUR LUCK IS RUNNING OUT."),
            Pause,
            When(Not(&DeviceConfiscated), &[Say("YOUR BACKPACK IS NOWHERE TO BE FOUND."), Pause]),
            When(All(&[Jackpot, DeviceConfiscated]), &[Say("YOUR CASH IS GONE!"), Pause]),
            When(All(&[Jackpot, Not(&DeviceConfiscated)]), &[Say("AND YOUR CASH IS GONE!"), Pause]),
        ]),
        Say("YOUR GPS TELLS YOU THAT YOU ARE NEAR ROSWELL, NM."),
        Pause,
        Say("YOU SEE A LARGE SIGN. IT SAYS:"),
        Pause,
        Say("----------------\n!  WELCOME TO  ! \n!    AREA 51   !\n----------------"),
        Pause,
        Say("AND ANOTHER ONE:"),
        Pause,
        Say("----------------\n! PLEASE ENJOY !\n!  YOUR  STAY  !\n----------------"),
        Pause,
    ], next!(Area51Gate)),

    // Area 51 --------------------------------------------------------------
    scene!(Area51Gate, [Say("THE GATE IS WIDE OPEN."), Pause], menu!(" DO YOU GO IN?  ", [
        "YES" => Area51Yes,
        "NO" => Area51No,
    ])),
    scene!(Area51No, [
        Say("WHAT KIND OF LOSER ARE YOU?!?"),
        Pause,
        Say("LET'S TRY THAT AGAIN."),
        Pause,
    ], next!(Area51Gate)),
    scene!(Area51Yes, [
        Say("GOOD FOR YOU!"),
        Pause,
        Say("YOU ENTER A BUILDING, AND FIND THE LIBRARY."),
        Pause,
        Say("YOU PICK UP A BOOK: THE EVIL SOCK."),
        Pause,
    ], next!(Area51Book)),
    scene!(Area51Book, [], menu!("WHAT DO YOU DO?", [
        "READ IT" => Area51Read,
        "EAT IT" => Area51Eat,
    ])),
    scene!(Area51Eat, [
        Say("NOT BAD, BUT IT COULD HAVE USED SOME SALT."),
        Pause,
        Say("YOU THEN EXPERIENCE THE WORST CASE OF INDIGESTION EVER"),
    ], death!("book_indigestion")),
    scene!(Area51Read, [
        Say("YOU OPEN THE BOOK AND A KEY FALLS OUT."),
        Pause,
        Say("THE KEYCHAIN SAYS: ROOM 15^2."),
        Pause,
    ], next!(Area51Room)),
    scene!(Area51Room, [], menu!("   WHICH ROOM  ?", [
        "0" => Area51WrongRoom,
        "15" => Area51WrongRoom,
        "30" => Area51WrongRoom,
        "152" => Area51WrongRoom,
        "225" => Area51RightRoom,
        "1515" => Area51WrongRoom,
    ])),
    scene!(Area51WrongRoom, [
        Say("IF THAT'S TOO HARD, WHY DO YOU EVEN HAVE A GRAPHING CALCULATOR?"),
    ], death!("math_fail")),
    scene!(Area51RightRoom, [
        Say("GOOD JOB!"),
        Pause,
        Say("YOU GO TO RM.225"),
        Pause,
        Say("IT'S A BATHROOM!"),
        Pause,
    ], next!(Area51Bathroom)),
    scene!(Area51Bathroom, [], menu!("WHAT DO YOU DO? ", [
        "TAKE A LEAK" => Area51Leak,
        "TAKE A DRINK" => Area51Drink,
        "TAKE A LOOK" => Area51Look,
        "TAKE A NAP" => Area51Nap,
    ])),
    scene!(Area51Leak, [
        Say("AHHHHH..."),
        Pause,
        Say("BUT YOU SOMEHOW MANAGE TO GET FLUSHED DOWN THE TOILET."),
    ], death!("toilet_flush")),
    scene!(Area51Drink, [
        Say("YOU SICKEN ME!"),
        Pause,
        Say("SO MUCH SO THAT I THINK YOU SHOULD DIE."),
    ], death!("toilet_drink")),
    scene!(Area51Look, [
        Say("YOU LOOK AT THE AIR VENT AND GET A SUDDEN URGE TO CLIMB THROUGH IT"),
        Pause,
        Say("SO YOU DO. YIPPEE KI-YAY"),
        Pause,
    ], next!(Area51Vent)),
    scene!(Area51Nap, [
        Say("YOU TAKE A NAP. BUT AS YOU DO, YOU BREATHE IN TOO MUCH FLATULENCE."),
        Pause,
        Say("YOUR LUNGS CAN'T TAKE IT."),
    ], death!("toxic_nap")),
    scene!(Area51Vent, [
        Say("YOU CRAWL ON YOUR HANDS AND KNEES, UNTIL YOU FINALLY SEE A LIGHT AT THE END OF THE TUNNEL."),
        Pause,
        Say("YOU HEAR HORRIFYING SOUNDS COMING FROM THE COURTYARD."),
        Pause,
        Say("YOU LOOK DOWN THE HATCH AND SEE THE MOST BIZARRE SIGHT YOU WILL EVER SEE."),
        Pause,
        Say("THERE IS A GROUP OF CREATURES WHICH APPEAR TO BE MUTATED SQUID..."),
        Pause,
        Say("ALL DANCING THE YMCA!!!"),
        Pause,
        Say("SO THAT'S WHERE THE HORRIFYING SOUNDS WERE COMING FROM."),
        Pause,
        Say("YOU JUMP DOWN AND..."),
        Pause,
    ], next!(Area51Courtyard)),
    scene!(Area51Courtyard, [], menu!(" WHAT DO YOU DO?", [
        "SING" => Area51Sing,
        "TELL JOKES" => Area51Jokes,
        "DANCE" => Area51Dance,
        "BITE" => Area51Bite,
    ])),
    scene!(Area51Bite, [
        Say("YOU TAKE A BIG BITE OUT OF AN ALIEN'S JUGULAR VEIN. YOU ARE SPRAYED WITH ITS ACIDIC BLOOD."),
    ], death!("alien_blood")),
    scene!(Area51Sing, [
        Say("YOU START TO SING ALONG WITH THE SONG."),
        Pause,
        Say("NOW I MUST SMACK YOU."),
    ], death!("ymca_smack")),
    scene!(Area51Dance, [
        Say("YOU START TO DANCE ALONG WITH THE ALIENS. THEY ALL POINT AND LAUGH AT YOU."),
        Pause,
        Say("SELF-ESTEEM METER: |0| |-| |-| |-| |-| |-| |-|"),
        Pause,
    ], death!("alien_dance")),
    scene!(Area51Jokes, [
        Say("YOU WALK TO THE FRONT OF THE CROWD AND START TO RECITE A JERRY SEINFELD STAND-UP ROUTINE"),
        Pause,
        Say("THEY ALL GIVE YOU A BLANK STARE, UNTIL ONE OF THEM, RUPERT, TRANSLATES WHAT YOU SAID."),
        Pause,
        Say("THEY ALL LAUGH UNTIL THEY FALL OVER, GASPING FOR AIR."),
        Pause,
        Say("YOU KILLED THEM ALL!"),
        Pause,
        Say("NEWS OF THE MASSACRE IS SENT AND BIG BOSS BILLY BOB THE ALIENS' LEADER IS FURIOUS."),
        Pause,
        Say("SO YOU TRY THE ACT ON HIM TOO."),
        Pause,
        Say("ACK! HE HAS NO SENSE OF HUMOR!"),
        Pause,
        Say("SO YOU TELL HIM THAT THERE IS A BUG ON HIS SHOULDER."),
        Pause,
        Say("HE FREAKS OUT AND RUNS AWAY, SCREAMING AT THE TOP OF HIS LUNGS."),
        Pause,
        Say("YOU ARE A HERO. YOU SAVED AREA51 FROM THE EVIL ALIEN SQUID CULT."),
        Pause,
        Say("BUT SINCE IT IS CLASSIFIED INFO. NO ONE WILL EVER KNOW ABOUT IT."),
        Pause,
        Say("D'OH!"),
        Pause,
        Say("SO YOU WALK HOME DEPRESSED."),
        Pause,
        Say("YES, I REALIZE ITS A LONG WAY."),
        Pause,
        Say("WHAT A DAY IT'S BEEN."),
        Pause,
        Say("HEY, ISN'T THAT THE GIRL FROM LUNCH EARLIER TODAY?"),
        Pause,
        Say("YEA! YEA!"),
        Pause,
        Say("YOU REACH INTO YOUR POCKET AND MAGICALLY, YOU FIND 10 BUCKS!"),
        Pause,
        Say("YOU RUN UP TO HER AND ASK HER IF SHE STILL NEEDS THE MONEY."),
        Pause,
        Say("YEA, SURE."),
        Pause,
        Say("YOU GIVE IT TO HER AND YOU TWO LIVE HAPPILY EVER AFTER."),
        Pause,
        Say("..."),
        Wait(2.0),
        Pause,
        Say("\nWHAT KIND OF LAME ENDING WAS THAT?!?!"),
        Pause,
        Say("LETS TRY THAT AGAIN."),
        Pause,
        Say("TIME TRAVELING..."),
        Say(""),
        Wait(1.0),
        Pause,
        Say("SO YOU DEFEATED THE ALIEN SQUID CULT AND YOU ARE A HERO."),
        Pause,
        Say("SO YOU WALK HOME AND YOU SEE THE GIRL FROM LUNCH."),
        Pause,
        Say("SHE MUST LIKE YOU, SHE KEEPS SHOWING UP ALONG THE WAY!"),
        Pause,
        Say("SHE LEANS CLOSE TO YOUR EAR AND WHISPERS..."),
        Pause,
        Say("\"YOU KNOW WHAT I WANT TO DO...\""),
        Pause,
        Say("*GULP* \"YEA... BUT I'M NOT REALLY IN THE MOOD.\""),
        Pause,
    ], next!(FinalMenu)),
    scene!(FinalMenu, [], menu!("  SO NOW WHAT?  ", [
        "SCREAM" => FinalScream,
        "DIG HOLE" => FinalDig,
        "GIVE UP" => FinalGiveUp,
    ])),
    scene!(FinalGiveUp, [
        Say("WHAT KIND OF LOSER ARE YOU!?!"),
        Pause,
        Say("YOU CAME ALL THIS WAY FOR... NOTHING!"),
        Wait(2.0),
        Say("YOU LOSER."),
        PauseWith(ROLL_CREDITS),
    ], death!("final_loser")),
    scene!(FinalScream, [
        Say("YOU SCREAM AS LOUD AS YOU CAN."),
        Pause,
        Say("\"I'M ALIVE AND I GOT THE GIRL. HIT ME WITH YOUR BEST SHOT, MONDAY!!!\""),
        Pause,
        Say("AND GUESS WHAT."),
        Pause,
        Say("IT DOES."),
        Wait(2.0),
        PauseWith(ROLL_CREDITS),
    ], death!("monday_revenge")),
    scene!(FinalDig, [
        Say("YOU BEGIN TO DIG FOR NO APPARENT REASON."),
        Pause,
        Say("YOU DIG AND DIG AND DIG."),
        Pause,
        Say("YOU HAVE NO IDEA WHY YOU'RE EVEN DIGGING."),
        Pause,
        Say("ITS HOPELESS. THERE'S NOTHING THERE."),
        Pause,
        Say("YOU THROW YOUR SHOVEL DOWN IN FRUSTRATION, NEARLY SMASHING A GLASS VIAL MARKED..."),
        Pause,
        Say("----------------\nI    AUSTIN    I\nI    POWER'S   I\nI     MOJO     I\n----------------"),
        Pause,
        Say("OH, BEHAVE!"),
        Pause,
        Say("YOU DOWN THE ENTIRE VIAL AND..."),
        Pause,
        Say("YOU CAN IMAGINE WHAT HAPPENS NEXT."),
        Pause,
        Say("USE YOUR IMAGINATION."),
        Pause,
        Say("HEEHEEHEEHEE."),
        Wait(1.0),
        Pause,
        Say("A HALF HOUR LATER, YOU DRIFT OFF TO SLEEP."),
        Pause,
        Say("AND YOU THINK TO YOURSELF..."),
        Pause,
        Say("THIS DAY WAS AWESOME!\n\n"),
        Wait(2.0),
        Say("      ROLL\n      THE\n    CREDITS!   "),
        PauseWith(ROLL_CREDITS),
    ], Exit::Outcome(Outcome::GoodEnding)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SceneGraph;
    use crate::scene::Beat;
    use std::collections::BTreeSet;

    fn beat_texts(beats: &[Beat], out: &mut Vec<&'static str>) {
        for beat in beats {
            match beat {
                Beat::Say(text) | Beat::PauseWith(text) => out.push(*text),
                Beat::When(_, inner) => beat_texts(inner, out),
                Beat::Pause | Beat::Wait(_) => {}
            }
        }
    }

    #[test]
    fn script_validates() {
        let graph = SceneGraph::new(SCRIPT).unwrap();
        assert_eq!(graph.len(), SCRIPT.len());
    }

    #[test]
    fn every_scene_reachable_from_title() {
        let graph = SceneGraph::new(SCRIPT).unwrap();
        let reachable = graph.reachable_from(SceneId::Title);
        let all: BTreeSet<_> = SCRIPT.iter().map(|scene| scene.id).collect();
        assert_eq!(reachable, all);
    }

    #[test]
    fn every_catalogued_death_has_a_scene() {
        let graph = SceneGraph::new(SCRIPT).unwrap();
        let causes = graph.death_causes();
        for (id, _) in crate::deaths::DEATH_CAUSES {
            assert!(causes.contains(id), "no scene ends in '{id}'");
        }
    }

    #[test]
    fn hub_menus_are_uncounted() {
        for scene in SCRIPT {
            if let Exit::Menu(menu) = scene.exit {
                let hub = matches!(
                    scene.id,
                    SceneId::MainMenu
                        | SceneId::Hints
                        | SceneId::HintOne
                        | SceneId::HintTwo
                        | SceneId::HintThree
                        | SceneId::HintFour
                );
                assert_eq!(menu.counted, !hub, "{}", scene.id);
            }
        }
    }

    #[test]
    fn waits_are_positive() {
        fn check(beats: &[Beat]) {
            for beat in beats {
                match beat {
                    Beat::Wait(secs) => assert!(*secs > 0.0),
                    Beat::When(_, inner) => check(inner),
                    _ => {}
                }
            }
        }
        for scene in SCRIPT {
            check(scene.beats);
        }
    }

    #[test]
    fn no_blank_menu_labels() {
        let mut texts = Vec::new();
        for scene in SCRIPT {
            beat_texts(scene.beats, &mut texts);
            if let Exit::Menu(menu) = scene.exit {
                assert!(!menu.title.trim().is_empty());
                assert!(menu.choices.iter().all(|c| !c.label.is_empty()));
            }
        }
        assert!(texts.iter().any(|t| t.contains("ROSWELL")));
    }
}
