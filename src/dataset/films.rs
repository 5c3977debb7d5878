use crate::core::DetailedDataPoint;

const fn beat(x: u32, value: f64, label: &'static str, emotion: &'static str) -> DetailedDataPoint {
    DetailedDataPoint::new_static(x, value, label, emotion)
}

pub static FOLLOWING: [DetailedDataPoint; 24] = [
    beat(1, 0.0, "Bill shadowing strangers", "Curiosity"),
    beat(2, 1.0, "Setting the rules of following", "Control"),
    beat(3, -1.0, "Everyone has a box (Theme)", "Obsession"),
    beat(4, -3.0, "Caught by Cobb in the diner", "Embarrassment"),
    beat(5, 2.0, "Cobb invites Bill to burgle", "Intrigue"),
    beat(6, 4.0, "First break-in together", "Thrill"),
    beat(7, 3.0, "Obsessing over the Blonde", "Infatuation"),
    beat(8, 5.0, "Adopting Cobb's lifestyle", "Transformation"),
    beat(9, 2.0, "Dating the Blonde", "Connection"),
    beat(10, -4.0, "Blonde reveals blackmail plot", "Concern"),
    beat(11, -2.0, "Planning to rob the safe", "Determination"),
    beat(12, -6.0, "The robbery / Photos found", "Shock"),
    beat(13, -5.0, "Realizing the danger", "Fear"),
    beat(14, -8.0, "The hammer murder scene", "Horror"),
    beat(15, -6.0, "Police suspicion grows", "Paranoia"),
    beat(16, -9.0, "Framed for the murder", "Trapped"),
    beat(17, -10.0, "Cobb disappears completely", "Abandonment"),
    beat(18, -7.0, "Confessing to police", "Desperation"),
    beat(19, -5.0, "Story doesn't add up", "Confusion"),
    beat(20, -8.0, "Police search Bill's apartment", "Doom"),
    beat(21, -9.0, "Evidence found planted", "Betrayal"),
    beat(22, -10.0, "Bill realizes he is the mark", "Defeat"),
    beat(23, -4.0, "Cobb watching in the crowd", "Coldness"),
    beat(24, -8.0, "Alone in prison", "Isolation"),
];

pub static MEMENTO: [DetailedDataPoint; 24] = [
    beat(1, 4.0, "Killing Teddy (The end is the beginning)", "Vengeance"),
    beat(2, -2.0, "Waking up in the motel room", "Confusion"),
    beat(3, -3.0, "Talking to 'Sammy' on the phone", "Loneliness"),
    beat(4, 2.0, "Tattooing 'Fact 5'", "Purpose"),
    beat(5, -4.0, "Meeting Natalie at the bar", "Suspicion"),
    beat(6, -1.0, "Natalie tests Leonard (Spit drink)", "Disgust"),
    beat(7, -5.0, "Remembering his wife's death", "Trauma"),
    beat(8, 3.0, "Finding the Jaguar and suit", "Transformation"),
    beat(9, 1.0, "Chasing Dodd (or being chased?)", "Adrenaline"),
    beat(10, -6.0, "Discovering he attacked Dodd", "Guilt"),
    beat(11, 2.0, "Sleeping with Natalie (False comfort)", "Intimacy"),
    beat(12, -8.0, "Burning his wife's possessions", "Grief"),
    beat(13, -7.0, "Hiring the escort to reenact the night", "Despair"),
    beat(14, -4.0, "Meeting Teddy at the warehouse", "Distrust"),
    beat(15, -2.0, "Arriving at the abandoned building", "Tension"),
    beat(16, -9.0, "Killing Jimmy Grantz", "Horror"),
    beat(17, -10.0, "Jimmy whispers 'Sammy'", "Shock"),
    beat(18, -8.0, "Teddy reveals the truth (You're Sammy)", "Betrayal"),
    beat(19, -5.0, "Leonard rejects the truth", "Denial"),
    beat(20, -3.0, "Deciding to set up Teddy", "Calculation"),
    beat(21, 0.0, "Writing 'Don't believe his lies'", "Determination"),
    beat(22, 3.0, "Driving away, closing his eyes", "Relief"),
    beat(23, 5.0, "The tattoo shop: 'I have to believe...'", "Hope"),
    beat(24, 2.0, "Now... where was I?", "Identity"),
];

pub static INSOMNIA: [DetailedDataPoint; 24] = [
    beat(1, 0.0, "Flying over glaciers", "Awe"),
    beat(2, -1.0, "Arrival in Nightmute", "Discomfort"),
    beat(3, -2.0, "Good cop can't sleep (Theme)", "Unease"),
    beat(4, 1.0, "Setting the trap for the killer", "Focus"),
    beat(5, -3.0, "Chasing into the fog", "Disorientation"),
    beat(6, -9.0, "Dormer shoots Hap by mistake", "Horror"),
    beat(7, -5.0, "Ellie investigates the scene", "Anxiety"),
    beat(8, -4.0, "Hiding the shell casing", "Guilt"),
    beat(9, -6.0, "Killer calls: 'I saw you'", "Paranoia"),
    beat(10, -8.0, "Insomnia hallucination begins", "Exhaustion"),
    beat(11, -2.0, "Meeting Finch on the ferry", "Suspicion"),
    beat(12, -7.0, "Finch admits it / Blackmails Dormer", "Trapped"),
    beat(13, -6.0, "Helping frame the boyfriend", "Corruption"),
    beat(14, -5.0, "Ellie finds the 9mm casing", "Tension"),
    beat(15, -8.0, "Finch's manipulation tightens", "Suffocation"),
    beat(16, -9.0, "Dormer's guilt consumes him", "Despair"),
    beat(17, -4.0, "Confessing to the hotel owner", "Unburdening"),
    beat(18, -2.0, "Ellie goes to the lake house", "Danger"),
    beat(19, 2.0, "Rushing to save Ellie", "Adrenaline"),
    beat(20, 4.0, "Shootout at the lake house", "Climax"),
    beat(21, 1.0, "Finch dead, Dormer shot", "Resolution"),
    beat(22, 3.0, "'Let me sleep'", "Peace"),
    beat(23, 5.0, "Stopping Ellie from hiding evidence", "Redemption"),
    beat(24, 6.0, "The Midnight Sun fades (metaphorically)", "Rest"),
];

pub static BATMAN_BEGINS: [DetailedDataPoint; 24] = [
    beat(1, -5.0, "Young Bruce falls into the well", "Fear"),
    beat(2, -9.0, "Parents murdered in the alley", "Trauma"),
    beat(3, -6.0, "Chill's parole hearing", "Injustice"),
    beat(4, -4.0, "Leaving Gotham to explore criminal mind", "Lost"),
    beat(5, -3.0, "Bhutan prison fight", "Rage"),
    beat(6, 2.0, "Ducard offers a path", "Hope"),
    beat(7, 4.0, "Training with League of Shadows", "Growth"),
    beat(8, 5.0, "Refusing to execute the criminal", "Integrity"),
    beat(9, 3.0, "Saving Ducard from fire", "Compassion"),
    beat(10, 6.0, "Return to Gotham with purpose", "Determination"),
    beat(11, 4.0, "Meeting Gordon / Lucius Fox", "Alliance"),
    beat(12, 7.0, "Creating the Batman persona", "Identity"),
    beat(13, 8.0, "First night out: Falcone captured", "Success"),
    beat(14, -2.0, "Scarecrow encounter, fear toxin", "Setback"),
    beat(15, -4.0, "Faking drunken behavior at party", "Sacrifice"),
    beat(16, -7.0, "Poisoned by Crane, on fire", "Fear"),
    beat(17, 0.0, "Saved by Fox, antidote", "Recovery"),
    beat(18, -6.0, "League attacks Gotham", "Crisis"),
    beat(19, -8.0, "Wayne Manor burns down", "Loss"),
    beat(20, 2.0, "Saving guests, gearing up", "Heroism"),
    beat(21, 5.0, "Monorail fight vs Ra's al Ghul", "Climax"),
    beat(22, 6.0, "I won't kill you, but I don't have to save you", "Resolution"),
    beat(23, 7.0, "Buying back the company", "Restoration"),
    beat(24, 8.0, "Gordon signals the Joker card", "The Call"),
];

pub static THE_PRESTIGE: [DetailedDataPoint; 24] = [
    beat(1, 0.0, "The water tank trick / Opening monologue", "Mystery"),
    beat(2, 3.0, "Angier & Borden working as shills", "Friendship"),
    beat(3, -8.0, "Julia dies in the water tank", "Tragedy"),
    beat(4, -7.0, "Angier blames Borden at funeral", "Conflict"),
    beat(5, -5.0, "The Bullet Catch sabotage", "Rivalry"),
    beat(6, -4.0, "Borden meets Sarah / The secret", "Obsession"),
    beat(7, -6.0, "The Transported Man debut", "Jealousy"),
    beat(8, 2.0, "Angier travels to find Tesla", "Hope"),
    beat(9, 4.0, "Borden's happy life with Sarah", "Love"),
    beat(10, -3.0, "Sabotaging the bird cage trick", "Revenge"),
    beat(11, 5.0, "Angier's new Transported Man", "Success"),
    beat(12, -7.0, "Borden interferes, Angier breaks leg", "Cruelty"),
    beat(13, -2.0, "Angier sends Olivia to spy", "Deceit"),
    beat(14, 6.0, "Tesla's machine works (cloning)", "Power"),
    beat(15, 8.0, "Angier's Real Transported Man", "Triumph"),
    beat(16, -4.0, "Borden baffled and defeated", "Defeat"),
    beat(17, -9.0, "Sarah commits suicide", "Tragedy"),
    beat(18, -5.0, "Borden investigates backstage", "Trap"),
    beat(19, -7.0, "Angier dies, Borden framed", "Twist"),
    beat(20, -8.0, "Borden in prison, Lord Caldlow reveal", "Betrayal"),
    beat(21, 5.0, "Fallon reveals himself as Borden", "Reveal"),
    beat(22, 2.0, "Shooting Angier in the theater", "Revenge"),
    beat(23, 6.0, "The secret of the twins explained", "Clarification"),
    beat(24, 4.0, "The rows of tanks, abracadabra", "Awe"),
];

pub static THE_DARK_KNIGHT: [DetailedDataPoint; 24] = [
    beat(1, -2.0, "Joker's bank heist", "Chaos"),
    beat(2, 5.0, "Batman stops Scarecrow / copycats", "Control"),
    beat(3, 4.0, "Bruce believes in Harvey Dent", "Hope"),
    beat(4, -3.0, "Joker kills Gambol", "Threat"),
    beat(5, 7.0, "Lau extraction from Hong Kong", "Triumph"),
    beat(6, -5.0, "Joker kills judge & commissioner", "Fear"),
    beat(7, 6.0, "Bruce throws fundraiser for Dent", "Alliance"),
    beat(8, -4.0, "Joker crashes the party", "Terror"),
    beat(9, 2.0, "Batman saves Rachel", "Relief"),
    beat(10, -7.0, "Loeb's funeral / Gordon 'dies'", "Loss"),
    beat(11, -3.0, "Batman interrogates Maroni", "Desperation"),
    beat(12, 8.0, "Truck flip chase / Gordon lives", "Victory"),
    beat(13, -2.0, "Interrogation room with Joker", "Conflict"),
    beat(14, -6.0, "Rachel & Dent kidnapped", "Panic"),
    beat(15, -10.0, "Rachel dies in explosion", "Devastation"),
    beat(16, -9.0, "Dent disfigured (Two-Face)", "Tragedy"),
    beat(17, -5.0, "Joker targets Reese / Hospital blown", "Chaos"),
    beat(18, -4.0, "The Ferry dilemma", "Tension"),
    beat(19, 6.0, "Citizens refuse to blow up ferries", "Humanity"),
    beat(20, 7.0, "Batman captures Joker", "Success"),
    beat(21, -6.0, "Two-Face holds Gordon's family", "Horror"),
    beat(22, -3.0, "Batman kills Dent to save boy", "Sacrifice"),
    beat(23, -1.0, "Taking the blame / The Lie", "Burden"),
    beat(24, 5.0, "Running into the dark / A Legend", "Myth"),
];

pub static INCEPTION: [DetailedDataPoint; 24] = [
    beat(1, -2.0, "Waking up on the beach, confusion", "Unease"),
    beat(2, -4.0, "Failed extraction mission against Saito", "Frustration"),
    beat(3, -6.0, "Cobol Engineering threat, fleeing", "Anxiety"),
    beat(4, 3.0, "Saito makes the offer for Inception", "Hope"),
    beat(5, 5.0, "Recruiting Ariadne in Paris, dream physics", "Joy"),
    beat(6, -5.0, "Mal sabotages the bridge test", "Fear"),
    beat(7, 2.0, "Recruiting Eames and Yusuf", "Confidence"),
    beat(8, -3.0, "Chase in Mombasa, narrow escape", "Tension"),
    beat(9, 4.0, "Saito buys the airline, plan set", "Triumph"),
    beat(10, 1.0, "Boarding the flight, mission begins", "Focus"),
    beat(11, -6.0, "Train hits in rainy city, kidnapping goes wrong", "Shock"),
    beat(12, -8.0, "Saito shot, limbo revelation", "Despair"),
    beat(13, 3.0, "Eames impersonates Browning, planting idea", "Relief"),
    beat(14, -2.0, "Van chase, defending the dreamer", "Tension"),
    beat(15, 1.0, "Entering the Hotel level", "Focus"),
    beat(16, 4.0, "Gravity shift fight hallway sequence", "Excitement"),
    beat(17, 2.0, "Infiltrating the Snow Fortress", "Hope"),
    beat(18, -9.0, "Mal shoots Fischer, mission failing", "Devastation"),
    beat(19, -5.0, "Ariadne & Cobb drop into Limbo", "Uncertainty"),
    beat(20, 7.0, "Confronting Mal, letting her go", "Catharsis"),
    beat(21, 8.0, "Riding the kicks back up levels", "Thrill"),
    beat(22, 6.0, "Waking up on the plane, silent nods", "Relief"),
    beat(23, 9.0, "Through customs, arrival home", "Happiness"),
    beat(24, 10.0, "Spinning the top, children turn around", "Elation"),
];

pub static THE_DARK_KNIGHT_RISES: [DetailedDataPoint; 24] = [
    beat(1, -3.0, "Plane heist, Bane introduced", "Threat"),
    beat(2, -5.0, "Dent Day, Bruce is a recluse", "Stagnation"),
    beat(3, 0.0, "Selina Kyle steals pearls", "Intrigue"),
    beat(4, -4.0, "Bane attacks stock exchange", "Violence"),
    beat(5, 4.0, "The Bat returns to chase Bane", "Hope"),
    beat(6, -3.0, "Bruce bankrupt, Daggett's plan", "Failure"),
    beat(7, 2.0, "Trusting Miranda Tate", "Trust"),
    beat(8, -5.0, "Catwoman leads Batman to Bane's trap", "Danger"),
    beat(9, -10.0, "Bane breaks Batman's back", "Defeat"),
    beat(10, -9.0, "Bruce wakes in the Pit", "Despair"),
    beat(11, -8.0, "Gotham under siege, stadium explosion", "Chaos"),
    beat(12, -7.0, "Police trapped underground", "Hopelessness"),
    beat(13, -6.0, "Bruce fails the climb", "Failure"),
    beat(14, 6.0, "Rising without the rope", "Triumph"),
    beat(15, 5.0, "Return to Gotham on ice", "Determination"),
    beat(16, 4.0, "Freeing the police force", "Rally"),
    beat(17, 0.0, "War in the streets", "Conflict"),
    beat(18, 5.0, "Batman defeats Bane", "Victory"),
    beat(19, -7.0, "Talia al Ghul reveal", "Betrayal"),
    beat(20, 2.0, "Chasing the bomb truck", "Tension"),
    beat(21, 8.0, "Flying the bomb over the bay", "Sacrifice"),
    beat(22, -4.0, "Alfred weeps at the grave", "Grief"),
    beat(23, 7.0, "Blake finds the Batcave", "Legacy"),
    beat(24, 10.0, "Alfred sees Bruce in Florence", "Happiness"),
];

pub static INTERSTELLAR: [DetailedDataPoint; 24] = [
    beat(1, -4.0, "Opening on Earth, dust storms, failing crops", "Frustration"),
    beat(2, -2.0, "Cooper with family, school conflict", "Unease"),
    beat(3, 2.0, "Discovering NASA’s secret base", "Hope"),
    beat(4, -7.0, "Decision to leave family behind", "Anxiety"),
    beat(5, 5.0, "Launch into space", "Joy"),
    beat(6, 3.0, "Arrival at Saturn wormhole", "Confidence"),
    beat(7, -6.0, "First planet (Miller’s water world), disaster", "Sadness"),
    beat(8, -8.0, "Doyle’s death, time dilation shock", "Betrayal"),
    beat(9, -9.0, "Return to Endurance, decades lost", "Devastation"),
    beat(10, -7.0, "Watching Murph’s angry video messages", "Anxiety"),
    beat(11, 1.0, "Journey to Mann’s planet", "Relief"),
    beat(12, -8.0, "Mann’s betrayal", "Deep sadness"),
    beat(13, -5.0, "Mann’s sabotage, Endurance damaged", "Tension"),
    beat(14, 6.0, "Docking sequence (Cooper saves Endurance)", "Achievement"),
    beat(15, -3.0, "Cooper decides to sacrifice himself", "Conflict"),
    beat(16, -10.0, "Entering the black hole", "Despair"),
    beat(17, 4.0, "Tesseract reveal, communication with Murph", "Satisfaction"),
    beat(18, 8.0, "Cooper realizes love bridges dimensions", "Triumph"),
    beat(19, 9.0, "Murph solves equation on Earth", "Celebration"),
    beat(20, 6.0, "Cooper rescued near Saturn", "Relief"),
    beat(21, 7.0, "Reunion with elderly Murph", "Happiness"),
    beat(22, 2.0, "Murph urges Cooper to find Brand", "Hope"),
    beat(23, 5.0, "Brand on Edmunds’ planet, new beginning", "Joy"),
    beat(24, 10.0, "Closing image: humanity’s survival assured", "Elation"),
];

pub static DUNKIRK: [DetailedDataPoint; 24] = [
    beat(1, -6.0, "Propaganda leaflets falling, alone", "Isolation"),
    beat(2, -8.0, "Ambushed at the barricade, running", "Terror"),
    beat(3, -3.0, "Meeting Gibson, burying the soldier", "Solidarity"),
    beat(4, -5.0, "Attempting to board with stretcher", "Rejection"),
    beat(5, -9.0, "Hospital ship torpedoed, drowning", "Panic"),
    beat(6, 2.0, "Mr. Dawson departs on the Moonstone", "Duty"),
    beat(7, 0.0, "Farrier engages in first dogfight", "Focus"),
    beat(8, -4.0, "Rescuing the Shivering Soldier", "Trauma"),
    beat(9, -7.0, "The Mole under dive bomber attack", "Despair"),
    beat(10, -5.0, "Hiding in the beached trawler", "Suspicion"),
    beat(11, -8.0, "Collins ditches plane, canopy stuck", "Claustrophobia"),
    beat(12, -6.0, "Shivering Soldier causes George's injury", "Conflict"),
    beat(13, -5.0, "Target practice on the trawler", "Tension"),
    beat(14, 5.0, "Farrier shoots down Heinkel", "Victory"),
    beat(15, -8.0, "Trawler sinks, Gibson drowns", "Horror"),
    beat(16, -9.0, "George dies on the boat", "Tragedy"),
    beat(17, 3.0, "Seeing the Little Ships arrive", "Hope"),
    beat(18, 4.0, "Moonstone rescues oil-slick survivors", "Relief"),
    beat(19, 2.0, "Farrier out of fuel, gliding", "Sacrifice"),
    beat(20, 6.0, "Soldiers board the Moonstone", "Salvation"),
    beat(21, 5.0, "Collins saved by Peter", "Gratitude"),
    beat(22, -2.0, "Train ride home, fearing scorn", "Anxiety"),
    beat(23, 7.0, "Reading Churchill's speech", "Pride"),
    beat(24, 8.0, "Farrier burns plane, captured", "Resilience"),
];

pub static TENET: [DetailedDataPoint; 24] = [
    beat(1, -4.0, "Opera House siege", "Confusion"),
    beat(2, -6.0, "Torture and suicide pill", "Pain"),
    beat(3, 2.0, "Waking up, 'Welcome to the Afterlife'", "Curiosity"),
    beat(4, 1.0, "Learning about Inversion bullets", "Intrigue"),
    beat(5, 4.0, "Bungee jumping into Mumbai penthouse", "Boldness"),
    beat(6, -2.0, "Meeting Sator, threat established", "Danger"),
    beat(7, 3.0, "Freeport plane crash heist", "Excitement"),
    beat(8, -3.0, "Fighting inverted self in hallway", "Disorientation"),
    beat(9, -5.0, "Sator threatens Kat on yacht", "Tension"),
    beat(10, 5.0, "Tallinn highway heist success", "Adrenaline"),
    beat(11, -7.0, "Sator captures Kat, temporal pincer", "Fear"),
    beat(12, -8.0, "Inverted car crash, hypothermia", "Defeat"),
    beat(13, -4.0, "Inverting to save Kat", "Desperation"),
    beat(14, 1.0, "Fight in Freeport (other perspective)", "Realization"),
    beat(15, 4.0, "Neil reveals he knew, friendship", "Trust"),
    beat(16, -9.0, "Sator's dead man switch activated", "Doom"),
    beat(17, 2.0, "Stalsk-12 temporal pincer begins", "War"),
    beat(18, -5.0, "Ives and Protagonist trapped in tunnel", "Trapped"),
    beat(19, -6.0, "The locked gate, Sator shoots Kat", "Frustration"),
    beat(20, 6.0, "Inverted corpse unlocks gate (Neil)", "Sacrifice"),
    beat(21, 8.0, "Retrieving algorithm, Kat kills Sator", "Victory"),
    beat(22, -3.0, "Neil reveals he has to go back to die", "Tragedy"),
    beat(23, 5.0, "Killing Priya to protect Kat", "Resolution"),
    beat(24, 9.0, "Protagonist realizes he's the boss", "Mastery"),
];

pub static OPPENHEIMER: [DetailedDataPoint; 24] = [
    beat(1, -5.0, "Young Oppie, visions, poison apple", "Anxiety"),
    beat(2, 2.0, "Studying in Europe, quantum physics", "Growth"),
    beat(3, 4.0, "Meeting Jean Tatlock", "Passion"),
    beat(4, 6.0, "Teaching at Berkeley, theory expanison", "Ambition"),
    beat(5, 5.0, "Groves recruits Oppenheimer", "Opportunity"),
    beat(6, 7.0, "Building Los Alamos", "Creation"),
    beat(7, -2.0, "Security clearance issues begin", "Suspicion"),
    beat(8, -8.0, "Jean Tatlock's suicide", "Guilt"),
    beat(9, -3.0, "Tension mounting before Trinity", "Stress"),
    beat(10, -6.0, "The dark night before the test", "Dread"),
    beat(11, 8.0, "Trinity Test detonation", "Awe"),
    beat(12, -4.0, "Victory speech, visions of skin peeling", "Horror"),
    beat(13, -7.0, "Bombing of Hiroshima/Nagasaki", "Conflict"),
    beat(14, -5.0, "'Blood on my hands' with Truman", "Shame"),
    beat(15, -3.0, "Strauss animosity grows (Isotopes)", "Politics"),
    beat(16, 2.0, "Post-war fame", "Recognition"),
    beat(17, -4.0, "Opposing the H-Bomb", "Resistance"),
    beat(18, -9.0, "Security hearing begins, humiliation", "Persecution"),
    beat(19, -6.0, "Roger Robb's interrogation", "Exposure"),
    beat(20, 3.0, "Kitty testifies with strength", "Solidarity"),
    beat(21, -8.0, "Clearance revoked, betrayal", "Defeat"),
    beat(22, 5.0, "Hill testifies against Strauss", "Justice"),
    beat(23, 6.0, "Strauss denied cabinet position", "Vindication"),
    beat(24, -2.0, "Einstein conversation: We destroyed the world", "Acceptance"),
];
