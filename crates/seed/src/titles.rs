/// Titles imported by a default seeding run, looked up by exact OMDb title.
pub const SEED_TITLES: &[&str] = &[
    "The Shawshank Redemption",
    "The Dark Knight",
    "Inception",
    "Interstellar",
    "Fight Club",
    "The Godfather",
    "The Godfather Part II",
    "The Matrix",
    "The Prestige",
    "The Social Network",
    "The Lion King",
    "Pulp Fiction",
    "Forrest Gump",
    "The Departed",
    "Gladiator",
    "Saving Private Ryan",
    "The Green Mile",
    "The Dark Knight Rises",
    "Joker",
    "Avengers: Endgame",
    "Avengers: Infinity War",
    "Guardians of the Galaxy",
    "Guardians of the Galaxy Vol. 2",
    "Iron Man",
    "Captain America: Civil War",
    "Spider-Man: No Way Home",
    "Doctor Strange",
    "Black Panther",
    "Thor: Ragnarok",
    "Mad Max: Fury Road",
    "Dune",
    "The Batman",
    "John Wick",
    "John Wick: Chapter 2",
    "John Wick: Chapter 3",
    "Mission: Impossible – Fallout",
    "Top Gun: Maverick",
    "The Revenant",
    "Avatar",
    "Avatar: The Way of Water",
];
