//! Embedded polarity lexicon
//!
//! A compact general-purpose English polarity table in the pattern-lexicon
//! style: each entry is a word with a score in [-1, 1]. Embedded so the
//! binary needs no model files at runtime.

/// Word polarity entries. Scores follow the usual lexicon convention:
/// strongly loaded words near the ends of the range, mild ones near zero.
pub const LEXICON: &[(&str, f64)] = &[
    // Strongly positive
    ("amazing", 0.9),
    ("awesome", 0.9),
    ("best", 1.0),
    ("breathtaking", 0.9),
    ("brilliant", 0.9),
    ("delightful", 0.8),
    ("excellent", 1.0),
    ("extraordinary", 0.9),
    ("fantastic", 0.9),
    ("flawless", 0.9),
    ("incredible", 0.9),
    ("magnificent", 0.9),
    ("masterful", 0.9),
    ("outstanding", 0.9),
    ("perfect", 1.0),
    ("spectacular", 0.9),
    ("stunning", 0.9),
    ("superb", 0.9),
    ("wonderful", 0.9),
    // Positive
    ("adventurous", 0.5),
    ("beautiful", 0.7),
    ("beloved", 0.7),
    ("brave", 0.6),
    ("celebrated", 0.6),
    ("charming", 0.6),
    ("cheerful", 0.7),
    ("clever", 0.5),
    ("comedy", 0.3),
    ("delight", 0.7),
    ("dream", 0.4),
    ("enjoy", 0.6),
    ("epic", 0.5),
    ("exciting", 0.7),
    ("famous", 0.4),
    ("fortune", 0.4),
    ("free", 0.4),
    ("freedom", 0.5),
    ("friend", 0.4),
    ("friendly", 0.6),
    ("friendship", 0.6),
    ("fun", 0.6),
    ("funny", 0.6),
    ("generous", 0.6),
    ("gentle", 0.5),
    ("glamorous", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happiness", 0.8),
    ("happy", 0.8),
    ("heartwarming", 0.8),
    ("help", 0.3),
    ("hero", 0.5),
    ("heroic", 0.6),
    ("hilarious", 0.8),
    ("honest", 0.5),
    ("hope", 0.5),
    ("hopeful", 0.6),
    ("inspiring", 0.7),
    ("joy", 0.8),
    ("joyful", 0.8),
    ("kind", 0.6),
    ("laugh", 0.6),
    ("legendary", 0.6),
    ("love", 0.7),
    ("loving", 0.7),
    ("loyal", 0.6),
    ("lucky", 0.6),
    ("magical", 0.6),
    ("nice", 0.6),
    ("passion", 0.5),
    ("passionate", 0.6),
    ("peace", 0.5),
    ("peaceful", 0.6),
    ("playful", 0.5),
    ("popular", 0.4),
    ("powerful", 0.4),
    ("pretty", 0.5),
    ("proud", 0.5),
    ("quirky", 0.3),
    ("rescue", 0.3),
    ("rich", 0.4),
    ("romance", 0.4),
    ("romantic", 0.5),
    ("save", 0.3),
    ("smart", 0.5),
    ("special", 0.4),
    ("success", 0.6),
    ("successful", 0.6),
    ("sweet", 0.6),
    ("talented", 0.6),
    ("thrilling", 0.5),
    ("triumph", 0.7),
    ("warm", 0.5),
    ("wealthy", 0.4),
    ("win", 0.5),
    ("wise", 0.5),
    ("witty", 0.6),
    // Mildly negative
    ("awkward", -0.4),
    ("bitter", -0.5),
    ("bizarre", -0.3),
    ("chaos", -0.5),
    ("cold", -0.3),
    ("conflict", -0.3),
    ("criminal", -0.5),
    ("crisis", -0.5),
    ("dangerous", -0.5),
    ("dark", -0.4),
    ("desperate", -0.5),
    ("difficult", -0.4),
    ("dysfunctional", -0.5),
    ("enemy", -0.4),
    ("fear", -0.5),
    ("fight", -0.3),
    ("grim", -0.5),
    ("hard", -0.3),
    ("harsh", -0.5),
    ("haunted", -0.4),
    ("lie", -0.4),
    ("lonely", -0.5),
    ("lost", -0.3),
    ("mysterious", -0.2),
    ("poor", -0.4),
    ("problem", -0.3),
    ("revenge", -0.4),
    ("ruthless", -0.5),
    ("sad", -0.5),
    ("scandal", -0.5),
    ("secret", -0.1),
    ("sinister", -0.6),
    ("strange", -0.2),
    ("struggle", -0.4),
    ("suspicious", -0.4),
    ("trouble", -0.4),
    ("troubled", -0.5),
    ("ugly", -0.6),
    ("unhappy", -0.6),
    ("wrong", -0.4),
    // Strongly negative
    ("abuse", -0.8),
    ("awful", -0.9),
    ("betrayal", -0.7),
    ("brutal", -0.8),
    ("corrupt", -0.7),
    ("cruel", -0.8),
    ("deadly", -0.7),
    ("death", -0.6),
    ("destroy", -0.7),
    ("devastating", -0.8),
    ("disaster", -0.8),
    ("dreadful", -0.9),
    ("evil", -0.8),
    ("hate", -0.8),
    ("horrible", -0.9),
    ("horrific", -0.9),
    ("horror", -0.7),
    ("kill", -0.7),
    ("killer", -0.7),
    ("murder", -0.8),
    ("nightmare", -0.8),
    ("terrible", -0.9),
    ("terrifying", -0.8),
    ("terror", -0.8),
    ("torture", -0.9),
    ("toxic", -0.7),
    ("tragedy", -0.7),
    ("tragic", -0.7),
    ("vicious", -0.8),
    ("violence", -0.7),
    ("violent", -0.7),
    ("war", -0.5),
    ("worst", -1.0),
];

/// Words that invert the polarity of the word that follows them.
pub const NEGATORS: &[&str] = &["not", "no", "never", "neither", "nor", "without", "hardly"];
