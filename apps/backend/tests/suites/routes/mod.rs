mod admin;
mod leaderboard;
mod trace;
