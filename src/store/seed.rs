//! Example posts loaded into a fresh store at startup.

/// `(username, content)` pairs, head of the board first.
pub const SEED_POSTS: [(&str, &str); 8] = [
    (
        "stay hard",
        "Motivation is what gets you started. Habit is what keeps you going. Stay consistent and watch yourself grow! #motivation #consistency",
    ),
    (
        "Work hard",
        "The only place where success comes before work is in the dictionary. Put in the effort today for a better tomorrow. 💪 #hardwork #success",
    ),
    (
        "Keep learning",
        "Learning is a treasure that will follow its owner everywhere. Never stop exploring, never stop growing. 📚 #growthmindset #lifelonglearning",
    ),
    (
        "Go with flow",
        "Sometimes the best thing you can do is not think, not wonder, not imagine, not obsess. Just breathe and have faith that everything will work out. 🌊 #mindfulness #peace",
    ),
    (
        "CodeMaster",
        "Debugging is like being the detective in a crime movie where you are also the murderer. Keep calm and console.log! 👨‍💻 #programming #webdev",
    ),
    (
        "Traveler_01",
        "Travel isn't always pretty. It isn't always comfortable. But that's okay. The journey changes you; it should change you. ✈️ #wanderlust #adventure",
    ),
    (
        "FitnessGuru",
        "The body achieves what the mind believes. One day or day one – you decide. 🏋️ #fitness #healthylifestyle",
    ),
    (
        "BookWorm",
        "A room without books is like a body without a soul. Currently reading 'The Alchemist' - highly recommended! 📖 #reading #books",
    ),
];
