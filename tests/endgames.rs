mod common;

common::assert_perft!(
    endgame_1: ("7k/1r5p/8/3p4/4p3/7P/5PP1/3R2K1 w - - 0 1", 5, 1697353),
    pawn_ending_2: ("5k2/5P1p/4K3/8/8/8/7P/8 w - - 0 1", 7, 1181584),

    en_passant_1: ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 5, 674624),
    en_passant_2: ("8/6b1/8/R7/2p3k1/4P3/P2P4/K7 w - - 0 1", 6, 1533504),

    mate_bishop_knight: ("7k/5K2/8/8/8/6N1/7B/8 w - - 16 9", 7, 998819),
    rook_vs_knight: ("8/8/8/8/8/3k4/r7/3NK3 w - - 0 1", 6, 1113805),
    queen_vs_rook: ("8/8/4r3/3k4/8/8/3K1Q2/8 w - - 0 1", 5, 2794712),
    rook_vs_rook_bishop: ("3k4/4r3/3K4/3B4/8/8/8/5R2 b - - 0 1", 5, 1993965),
);
