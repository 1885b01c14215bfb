//! AFINN-style English word weights.
//!
//! Keys are lowercase tokens as produced by the scorer's tokenizer (apostrophes
//! and hyphens kept). Weights are integers in `[-5, 5]`.

pub(crate) const LEXICON: &[(&str, i64)] = &[
    // Negative
    ("abandon", -2),
    ("abandoned", -2),
    ("abuse", -3),
    ("abused", -3),
    ("accident", -2),
    ("accidents", -2),
    ("afraid", -2),
    ("aggressive", -2),
    ("alarmed", -2),
    ("anger", -3),
    ("angry", -3),
    ("annoyed", -2),
    ("annoying", -2),
    ("anxious", -2),
    ("arrest", -2),
    ("arrested", -3),
    ("arrogant", -2),
    ("ashamed", -2),
    ("attack", -1),
    ("awful", -3),
    ("bad", -3),
    ("badly", -3),
    ("bastard", -5),
    ("bitch", -5),
    ("blame", -2),
    ("blamed", -2),
    ("bomb", -1),
    ("boring", -3),
    ("broke", -1),
    ("broken", -1),
    ("cancel", -1),
    ("cancelled", -1),
    ("careless", -2),
    ("chaos", -2),
    ("chaotic", -2),
    ("cheat", -3),
    ("collapse", -2),
    ("complain", -2),
    ("complaint", -2),
    ("conflict", -2),
    ("confused", -2),
    ("corrupt", -3),
    ("corruption", -2),
    ("crap", -3),
    ("crash", -2),
    ("crazy", -2),
    ("crime", -3),
    ("crisis", -3),
    ("cruel", -3),
    ("cry", -1),
    ("crying", -2),
    ("damage", -3),
    ("damn", -4),
    ("danger", -2),
    ("dangerous", -2),
    ("dead", -3),
    ("death", -2),
    ("debt", -2),
    ("delay", -1),
    ("delayed", -1),
    ("denied", -2),
    ("depressed", -2),
    ("depressing", -2),
    ("destroy", -3),
    ("destroyed", -3),
    ("die", -3),
    ("died", -3),
    ("dies", -3),
    ("difficult", -1),
    ("dirty", -2),
    ("disappointed", -2),
    ("disappointing", -2),
    ("disaster", -2),
    ("disease", -1),
    ("disgust", -3),
    ("disgusting", -3),
    ("dislike", -2),
    ("dissatisfied", -2),
    ("dread", -2),
    ("dumb", -3),
    ("embarrassed", -2),
    ("evil", -3),
    ("exhausted", -2),
    ("fail", -2),
    ("failed", -2),
    ("failing", -2),
    ("failure", -2),
    ("fake", -3),
    ("fear", -2),
    ("fight", -1),
    ("fighting", -2),
    ("fire", -2),
    ("fired", -2),
    ("fraud", -4),
    ("frustrated", -2),
    ("frustrating", -2),
    ("fuck", -4),
    ("fucked", -4),
    ("fucking", -4),
    ("furious", -3),
    ("greedy", -2),
    ("guilty", -3),
    ("gun", -1),
    ("hate", -3),
    ("hated", -3),
    ("hell", -4),
    ("helpless", -2),
    ("hopeless", -2),
    ("horrible", -3),
    ("horrific", -3),
    ("hostile", -2),
    ("hunger", -2),
    ("hurt", -2),
    ("hurting", -2),
    ("hurts", -2),
    ("idiot", -3),
    ("ignored", -2),
    ("ill", -2),
    ("injured", -2),
    ("injury", -2),
    ("irritated", -3),
    ("jail", -1),
    ("jealous", -2),
    ("kill", -3),
    ("killed", -3),
    ("killing", -3),
    ("kills", -3),
    ("lazy", -1),
    ("liar", -3),
    ("lie", -2),
    ("lonely", -2),
    ("lose", -3),
    ("losing", -3),
    ("loss", -3),
    ("lost", -3),
    ("lousy", -2),
    ("mad", -3),
    ("mess", -2),
    ("messy", -2),
    ("miserable", -3),
    ("miss", -2),
    ("mistake", -2),
    ("mourn", -2),
    ("murder", -2),
    ("nasty", -3),
    ("nervous", -2),
    ("no", -1),
    ("outrage", -3),
    ("outraged", -3),
    ("pain", -2),
    ("panic", -3),
    ("pathetic", -2),
    ("pissed", -4),
    ("pollution", -2),
    ("poor", -2),
    ("poorly", -2),
    ("poverty", -1),
    ("problem", -2),
    ("problems", -2),
    ("protest", -2),
    ("punish", -2),
    ("racism", -3),
    ("racist", -3),
    ("regret", -2),
    ("riot", -2),
    ("rob", -2),
    ("rude", -2),
    ("ruin", -2),
    ("ruined", -2),
    ("sad", -2),
    ("sadly", -2),
    ("sadness", -2),
    ("scandal", -3),
    ("scared", -2),
    ("scary", -2),
    ("selfish", -3),
    ("shame", -2),
    ("shit", -4),
    ("shock", -2),
    ("shocked", -2),
    ("sick", -2),
    ("slow", -2),
    ("sorrow", -2),
    ("sorry", -1),
    ("steal", -2),
    ("stolen", -2),
    ("stress", -1),
    ("stressed", -2),
    ("stuck", -2),
    ("stupid", -2),
    ("suck", -3),
    ("sucks", -3),
    ("suffer", -2),
    ("suffering", -2),
    ("suicide", -2),
    ("terrible", -3),
    ("terrified", -3),
    ("threat", -2),
    ("tired", -2),
    ("tragedy", -2),
    ("tragic", -2),
    ("trouble", -2),
    ("ugly", -3),
    ("unacceptable", -2),
    ("unemployment", -2),
    ("unfair", -2),
    ("unhappy", -2),
    ("upset", -2),
    ("useless", -2),
    ("victim", -3),
    ("violence", -3),
    ("war", -2),
    ("waste", -1),
    ("weak", -2),
    ("weep", -2),
    ("weird", -2),
    ("worried", -3),
    ("worry", -3),
    ("worse", -3),
    ("worst", -3),
    ("worthless", -2),
    ("wrong", -2),
    ("wtf", -4),
    // Positive
    ("accept", 1),
    ("admire", 3),
    ("adorable", 3),
    ("agree", 1),
    ("amazing", 4),
    ("appreciate", 2),
    ("appreciated", 2),
    ("awesome", 4),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("bless", 2),
    ("blessed", 3),
    ("brave", 2),
    ("brilliant", 4),
    ("calm", 2),
    ("care", 2),
    ("celebrate", 3),
    ("charming", 3),
    ("cheerful", 2),
    ("cheers", 2),
    ("clean", 2),
    ("clever", 2),
    ("comfortable", 2),
    ("congrats", 2),
    ("cool", 1),
    ("delight", 3),
    ("delighted", 3),
    ("easy", 1),
    ("enjoy", 2),
    ("enjoyed", 2),
    ("excellent", 3),
    ("excited", 3),
    ("fair", 2),
    ("fantastic", 4),
    ("fast", 1),
    ("favorite", 2),
    ("fine", 2),
    ("free", 1),
    ("fresh", 1),
    ("friendly", 2),
    ("fun", 4),
    ("generous", 2),
    ("gift", 2),
    ("glad", 3),
    ("good", 3),
    ("gorgeous", 3),
    ("grateful", 3),
    ("great", 3),
    ("ha", 2),
    ("haha", 3),
    ("hahaha", 3),
    ("happy", 3),
    ("healthy", 2),
    ("help", 2),
    ("helpful", 2),
    ("hero", 2),
    ("honest", 2),
    ("hope", 2),
    ("hopeful", 2),
    ("hopes", 2),
    ("hug", 2),
    ("impressed", 3),
    ("impressive", 3),
    ("improve", 2),
    ("improved", 2),
    ("inspiring", 3),
    ("interesting", 2),
    ("joy", 3),
    ("kind", 2),
    ("kudos", 3),
    ("laugh", 1),
    ("like", 2),
    ("likes", 2),
    ("lmao", 4),
    ("lmfao", 4),
    ("lol", 3),
    ("love", 3),
    ("loved", 3),
    ("lovely", 3),
    ("loving", 2),
    ("lucky", 3),
    ("nice", 3),
    ("peace", 2),
    ("peaceful", 2),
    ("perfect", 3),
    ("pleasant", 3),
    ("please", 1),
    ("pleased", 3),
    ("positive", 2),
    ("powerful", 2),
    ("pretty", 1),
    ("promise", 1),
    ("proud", 2),
    ("recommend", 2),
    ("relief", 1),
    ("relieved", 2),
    ("reward", 2),
    ("rich", 2),
    ("rofl", 4),
    ("safe", 1),
    ("satisfied", 2),
    ("smile", 2),
    ("smooth", 1),
    ("solution", 1),
    ("strong", 2),
    ("success", 2),
    ("successful", 3),
    ("super", 3),
    ("support", 2),
    ("sweet", 2),
    ("thank", 2),
    ("thankful", 2),
    ("thanks", 2),
    ("top", 2),
    ("united", 1),
    ("useful", 2),
    ("valuable", 2),
    ("welcome", 2),
    ("win", 4),
    ("winner", 4),
    ("won", 3),
    ("wonderful", 4),
    ("woo", 3),
    ("woohoo", 3),
    ("worth", 2),
    ("wow", 4),
    ("yay", 2),
    ("yeah", 1),
    ("yes", 1),
];
