// Generated from the classic state listing; keep enum order and `STATES` row order in sync.

use super::{Action, SpriteName, State};

/// Index into the global state table. `Null` is the terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum StateId {
    Null = 0,
    Play = 1,
    PlayRun1 = 2,
    PlayRun2 = 3,
    PlayRun3 = 4,
    PlayRun4 = 5,
    PlayPain = 6,
    PlayPain2 = 7,
    PlayDie1 = 8,
    PlayDie2 = 9,
    PlayDie3 = 10,
    PlayDie4 = 11,
    PlayDie5 = 12,
    PlayDie6 = 13,
    PlayDie7 = 14,
    PossStnd = 15,
    PossStnd2 = 16,
    PossRun1 = 17,
    PossRun2 = 18,
    PossRun3 = 19,
    PossRun4 = 20,
    PossRun5 = 21,
    PossRun6 = 22,
    PossRun7 = 23,
    PossRun8 = 24,
    PossAtk1 = 25,
    PossAtk2 = 26,
    PossAtk3 = 27,
    PossPain = 28,
    PossPain2 = 29,
    PossDie1 = 30,
    PossDie2 = 31,
    PossDie3 = 32,
    PossDie4 = 33,
    PossDie5 = 34,
    PossXdie1 = 35,
    PossXdie2 = 36,
    PossXdie3 = 37,
    PossXdie4 = 38,
    PossXdie5 = 39,
    PossXdie6 = 40,
    PossXdie7 = 41,
    PossXdie8 = 42,
    PossXdie9 = 43,
    SposStnd = 44,
    SposStnd2 = 45,
    SposRun1 = 46,
    SposRun2 = 47,
    SposRun3 = 48,
    SposRun4 = 49,
    SposRun5 = 50,
    SposRun6 = 51,
    SposRun7 = 52,
    SposRun8 = 53,
    SposAtk1 = 54,
    SposAtk2 = 55,
    SposAtk3 = 56,
    SposPain = 57,
    SposPain2 = 58,
    SposDie1 = 59,
    SposDie2 = 60,
    SposDie3 = 61,
    SposDie4 = 62,
    SposDie5 = 63,
    SposXdie1 = 64,
    SposXdie2 = 65,
    SposXdie3 = 66,
    SposXdie4 = 67,
    SposXdie5 = 68,
    SposXdie6 = 69,
    SposXdie7 = 70,
    SposXdie8 = 71,
    SposXdie9 = 72,
    TrooStnd = 73,
    TrooStnd2 = 74,
    TrooRun1 = 75,
    TrooRun2 = 76,
    TrooRun3 = 77,
    TrooRun4 = 78,
    TrooRun5 = 79,
    TrooRun6 = 80,
    TrooRun7 = 81,
    TrooRun8 = 82,
    TrooAtk1 = 83,
    TrooAtk2 = 84,
    TrooAtk3 = 85,
    TrooPain = 86,
    TrooPain2 = 87,
    TrooDie1 = 88,
    TrooDie2 = 89,
    TrooDie3 = 90,
    TrooDie4 = 91,
    TrooDie5 = 92,
    TrooXdie1 = 93,
    TrooXdie2 = 94,
    TrooXdie3 = 95,
    TrooXdie4 = 96,
    TrooXdie5 = 97,
    TrooXdie6 = 98,
    TrooXdie7 = 99,
    TrooXdie8 = 100,
    SargStnd = 101,
    SargStnd2 = 102,
    SargRun1 = 103,
    SargRun2 = 104,
    SargRun3 = 105,
    SargRun4 = 106,
    SargRun5 = 107,
    SargRun6 = 108,
    SargRun7 = 109,
    SargRun8 = 110,
    SargAtk1 = 111,
    SargAtk2 = 112,
    SargAtk3 = 113,
    SargPain = 114,
    SargPain2 = 115,
    SargDie1 = 116,
    SargDie2 = 117,
    SargDie3 = 118,
    SargDie4 = 119,
    SargDie5 = 120,
    SargDie6 = 121,
    HeadStnd = 122,
    HeadRun1 = 123,
    HeadAtk1 = 124,
    HeadAtk2 = 125,
    HeadAtk3 = 126,
    HeadPain = 127,
    HeadPain2 = 128,
    HeadPain3 = 129,
    HeadDie1 = 130,
    HeadDie2 = 131,
    HeadDie3 = 132,
    HeadDie4 = 133,
    HeadDie5 = 134,
    HeadDie6 = 135,
    BossStnd = 136,
    BossStnd2 = 137,
    BossRun1 = 138,
    BossRun2 = 139,
    BossRun3 = 140,
    BossRun4 = 141,
    BossRun5 = 142,
    BossRun6 = 143,
    BossRun7 = 144,
    BossRun8 = 145,
    BossAtk1 = 146,
    BossAtk2 = 147,
    BossAtk3 = 148,
    BossPain = 149,
    BossPain2 = 150,
    BossDie1 = 151,
    BossDie2 = 152,
    BossDie3 = 153,
    BossDie4 = 154,
    BossDie5 = 155,
    BossDie6 = 156,
    BossDie7 = 157,
    SkullStnd = 158,
    SkullStnd2 = 159,
    SkullRun1 = 160,
    SkullRun2 = 161,
    SkullAtk1 = 162,
    SkullAtk2 = 163,
    SkullAtk3 = 164,
    SkullAtk4 = 165,
    SkullPain = 166,
    SkullPain2 = 167,
    SkullDie1 = 168,
    SkullDie2 = 169,
    SkullDie3 = 170,
    SkullDie4 = 171,
    SkullDie5 = 172,
    SkullDie6 = 173,
    PainStnd = 174,
    PainRun1 = 175,
    PainRun2 = 176,
    PainRun3 = 177,
    PainRun4 = 178,
    PainRun5 = 179,
    PainRun6 = 180,
    PainAtk1 = 181,
    PainAtk2 = 182,
    PainAtk3 = 183,
    PainAtk4 = 184,
    PainPain = 185,
    PainPain2 = 186,
    PainDie1 = 187,
    PainDie2 = 188,
    PainDie3 = 189,
    PainDie4 = 190,
    PainDie5 = 191,
    PainDie6 = 192,
    CyberStnd = 193,
    CyberStnd2 = 194,
    CyberRun1 = 195,
    CyberRun2 = 196,
    CyberRun3 = 197,
    CyberRun4 = 198,
    CyberRun5 = 199,
    CyberRun6 = 200,
    CyberRun7 = 201,
    CyberRun8 = 202,
    CyberAtk1 = 203,
    CyberAtk2 = 204,
    CyberAtk3 = 205,
    CyberAtk4 = 206,
    CyberAtk5 = 207,
    CyberAtk6 = 208,
    CyberPain = 209,
    CyberDie1 = 210,
    CyberDie2 = 211,
    CyberDie3 = 212,
    CyberDie4 = 213,
    CyberDie5 = 214,
    CyberDie6 = 215,
    CyberDie7 = 216,
    CyberDie8 = 217,
    CyberDie9 = 218,
    CyberDie10 = 219,
    SpidStnd = 220,
    SpidStnd2 = 221,
    SpidRun1 = 222,
    SpidRun2 = 223,
    SpidRun3 = 224,
    SpidRun4 = 225,
    SpidRun5 = 226,
    SpidRun6 = 227,
    SpidRun7 = 228,
    SpidRun8 = 229,
    SpidRun9 = 230,
    SpidRun10 = 231,
    SpidRun11 = 232,
    SpidRun12 = 233,
    SpidAtk1 = 234,
    SpidAtk2 = 235,
    SpidAtk3 = 236,
    SpidAtk4 = 237,
    SpidPain = 238,
    SpidPain2 = 239,
    SpidDie1 = 240,
    SpidDie2 = 241,
    SpidDie3 = 242,
    SpidDie4 = 243,
    SpidDie5 = 244,
    SpidDie6 = 245,
    SpidDie7 = 246,
    SpidDie8 = 247,
    SpidDie9 = 248,
    SpidDie10 = 249,
    SpidDie11 = 250,
    FattStnd = 251,
    FattStnd2 = 252,
    FattRun1 = 253,
    FattRun2 = 254,
    FattRun3 = 255,
    FattRun4 = 256,
    FattRun5 = 257,
    FattRun6 = 258,
    FattRun7 = 259,
    FattRun8 = 260,
    FattRun9 = 261,
    FattRun10 = 262,
    FattRun11 = 263,
    FattRun12 = 264,
    FattAtk1 = 265,
    FattAtk2 = 266,
    FattAtk3 = 267,
    FattAtk4 = 268,
    FattAtk5 = 269,
    FattAtk6 = 270,
    FattAtk7 = 271,
    FattAtk8 = 272,
    FattAtk9 = 273,
    FattAtk10 = 274,
    FattPain = 275,
    FattPain2 = 276,
    FattDie1 = 277,
    FattDie2 = 278,
    FattDie3 = 279,
    FattDie4 = 280,
    FattDie5 = 281,
    FattDie6 = 282,
    FattDie7 = 283,
    FattDie8 = 284,
    FattDie9 = 285,
    FattDie10 = 286,
    SkelStnd = 287,
    SkelStnd2 = 288,
    SkelRun1 = 289,
    SkelRun2 = 290,
    SkelRun3 = 291,
    SkelRun4 = 292,
    SkelRun5 = 293,
    SkelRun6 = 294,
    SkelRun7 = 295,
    SkelRun8 = 296,
    SkelRun9 = 297,
    SkelRun10 = 298,
    SkelRun11 = 299,
    SkelRun12 = 300,
    SkelFist1 = 301,
    SkelFist2 = 302,
    SkelFist3 = 303,
    SkelFist4 = 304,
    SkelMiss1 = 305,
    SkelMiss2 = 306,
    SkelMiss3 = 307,
    SkelMiss4 = 308,
    SkelPain = 309,
    SkelPain2 = 310,
    SkelDie1 = 311,
    SkelDie2 = 312,
    SkelDie3 = 313,
    SkelDie4 = 314,
    SkelDie5 = 315,
    SkelDie6 = 316,
    VileStnd = 317,
    VileStnd2 = 318,
    VileRun1 = 319,
    VileRun2 = 320,
    VileRun3 = 321,
    VileRun4 = 322,
    VileRun5 = 323,
    VileRun6 = 324,
    VileRun7 = 325,
    VileRun8 = 326,
    VileRun9 = 327,
    VileRun10 = 328,
    VileRun11 = 329,
    VileRun12 = 330,
    VileAtk1 = 331,
    VileAtk2 = 332,
    VileAtk3 = 333,
    VileAtk4 = 334,
    VileAtk5 = 335,
    VileAtk6 = 336,
    VileAtk7 = 337,
    VileAtk8 = 338,
    VileAtk9 = 339,
    VileAtk10 = 340,
    VileAtk11 = 341,
    VileAtk12 = 342,
    VilePain = 343,
    VilePain2 = 344,
    VileDie1 = 345,
    VileDie2 = 346,
    VileDie3 = 347,
    VileDie4 = 348,
    VileDie5 = 349,
    VileDie6 = 350,
    VileDie7 = 351,
    VileDie8 = 352,
    VileDie9 = 353,
    VileDie10 = 354,
    Tball1 = 355,
    Tball2 = 356,
    Tballx1 = 357,
    Tballx2 = 358,
    Tballx3 = 359,
    Rball1 = 360,
    Rball2 = 361,
    Rballx1 = 362,
    Rballx2 = 363,
    Rballx3 = 364,
    Brball1 = 365,
    Brball2 = 366,
    Brballx1 = 367,
    Brballx2 = 368,
    Brballx3 = 369,
    Rocket = 370,
    Explode1 = 371,
    Explode2 = 372,
    Explode3 = 373,
    Fatshot1 = 374,
    Fatshot2 = 375,
    Fatshotx1 = 376,
    Fatshotx2 = 377,
    Fatshotx3 = 378,
    Tracer = 379,
    Tracer2 = 380,
    Traceexp1 = 381,
    Traceexp2 = 382,
    Traceexp3 = 383,
    Puff1 = 384,
    Puff2 = 385,
    Puff3 = 386,
    Puff4 = 387,
    Blood1 = 388,
    Blood2 = 389,
    Blood3 = 390,
}

impl StateId {
    pub const COUNT: usize = 391;

    /// Reverse of `as u16`, for ids coming from data.
    pub fn from_index(index: u16) -> Option<Self> {
        STATES.get(usize::from(index)).map(|s| s.id)
    }
}

const fn st(
    id: StateId,
    sprite: SpriteName,
    frame: u16,
    tics: i32,
    action: Action,
    next: StateId,
) -> State {
    State { id, sprite, frame, tics, action, next }
}

/// Fullbright bit on the frame field.
const FB: u16 = 0x8000;

use Action as A;
use SpriteName as Sp;
use StateId as S;

#[rustfmt::skip]
pub static STATES: [State; StateId::COUNT] = [
    st(S::Null, Sp::Troo, 0, -1, A::None, S::Null),
    st(S::Play, Sp::Play, 0, -1, A::None, S::Null),
    st(S::PlayRun1, Sp::Play, 0, 4, A::None, S::PlayRun2),
    st(S::PlayRun2, Sp::Play, 1, 4, A::None, S::PlayRun3),
    st(S::PlayRun3, Sp::Play, 2, 4, A::None, S::PlayRun4),
    st(S::PlayRun4, Sp::Play, 3, 4, A::None, S::PlayRun1),
    st(S::PlayPain, Sp::Play, 6, 4, A::None, S::PlayPain2),
    st(S::PlayPain2, Sp::Play, 6, 4, A::Pain, S::Play),
    st(S::PlayDie1, Sp::Play, 7, 10, A::None, S::PlayDie2),
    st(S::PlayDie2, Sp::Play, 8, 10, A::PlayerScream, S::PlayDie3),
    st(S::PlayDie3, Sp::Play, 9, 10, A::Fall, S::PlayDie4),
    st(S::PlayDie4, Sp::Play, 10, 10, A::None, S::PlayDie5),
    st(S::PlayDie5, Sp::Play, 11, 10, A::None, S::PlayDie6),
    st(S::PlayDie6, Sp::Play, 12, 10, A::None, S::PlayDie7),
    st(S::PlayDie7, Sp::Play, 13, -1, A::None, S::Null),
    st(S::PossStnd, Sp::Poss, 0, 10, A::Look, S::PossStnd2),
    st(S::PossStnd2, Sp::Poss, 1, 10, A::Look, S::PossStnd),
    st(S::PossRun1, Sp::Poss, 0, 4, A::Chase, S::PossRun2),
    st(S::PossRun2, Sp::Poss, 0, 4, A::Chase, S::PossRun3),
    st(S::PossRun3, Sp::Poss, 1, 4, A::Chase, S::PossRun4),
    st(S::PossRun4, Sp::Poss, 1, 4, A::Chase, S::PossRun5),
    st(S::PossRun5, Sp::Poss, 2, 4, A::Chase, S::PossRun6),
    st(S::PossRun6, Sp::Poss, 2, 4, A::Chase, S::PossRun7),
    st(S::PossRun7, Sp::Poss, 3, 4, A::Chase, S::PossRun8),
    st(S::PossRun8, Sp::Poss, 3, 4, A::Chase, S::PossRun1),
    st(S::PossAtk1, Sp::Poss, 4, 10, A::FaceTarget, S::PossAtk2),
    st(S::PossAtk2, Sp::Poss, 5, 8, A::PosAttack, S::PossAtk3),
    st(S::PossAtk3, Sp::Poss, 4, 8, A::None, S::PossRun1),
    st(S::PossPain, Sp::Poss, 6, 3, A::None, S::PossPain2),
    st(S::PossPain2, Sp::Poss, 6, 3, A::Pain, S::PossRun1),
    st(S::PossDie1, Sp::Poss, 7, 5, A::None, S::PossDie2),
    st(S::PossDie2, Sp::Poss, 8, 5, A::Scream, S::PossDie3),
    st(S::PossDie3, Sp::Poss, 9, 5, A::Fall, S::PossDie4),
    st(S::PossDie4, Sp::Poss, 10, 5, A::None, S::PossDie5),
    st(S::PossDie5, Sp::Poss, 11, -1, A::None, S::Null),
    st(S::PossXdie1, Sp::Poss, 12, 5, A::None, S::PossXdie2),
    st(S::PossXdie2, Sp::Poss, 13, 5, A::XScream, S::PossXdie3),
    st(S::PossXdie3, Sp::Poss, 14, 5, A::Fall, S::PossXdie4),
    st(S::PossXdie4, Sp::Poss, 15, 5, A::None, S::PossXdie5),
    st(S::PossXdie5, Sp::Poss, 16, 5, A::None, S::PossXdie6),
    st(S::PossXdie6, Sp::Poss, 17, 5, A::None, S::PossXdie7),
    st(S::PossXdie7, Sp::Poss, 18, 5, A::None, S::PossXdie8),
    st(S::PossXdie8, Sp::Poss, 19, 5, A::None, S::PossXdie9),
    st(S::PossXdie9, Sp::Poss, 20, -1, A::None, S::Null),
    st(S::SposStnd, Sp::Spos, 0, 10, A::Look, S::SposStnd2),
    st(S::SposStnd2, Sp::Spos, 1, 10, A::Look, S::SposStnd),
    st(S::SposRun1, Sp::Spos, 0, 3, A::Chase, S::SposRun2),
    st(S::SposRun2, Sp::Spos, 0, 3, A::Chase, S::SposRun3),
    st(S::SposRun3, Sp::Spos, 1, 3, A::Chase, S::SposRun4),
    st(S::SposRun4, Sp::Spos, 1, 3, A::Chase, S::SposRun5),
    st(S::SposRun5, Sp::Spos, 2, 3, A::Chase, S::SposRun6),
    st(S::SposRun6, Sp::Spos, 2, 3, A::Chase, S::SposRun7),
    st(S::SposRun7, Sp::Spos, 3, 3, A::Chase, S::SposRun8),
    st(S::SposRun8, Sp::Spos, 3, 3, A::Chase, S::SposRun1),
    st(S::SposAtk1, Sp::Spos, 4, 10, A::FaceTarget, S::SposAtk2),
    st(S::SposAtk2, Sp::Spos, 5 | FB, 10, A::SPosAttack, S::SposAtk3),
    st(S::SposAtk3, Sp::Spos, 4, 10, A::None, S::SposRun1),
    st(S::SposPain, Sp::Spos, 6, 3, A::None, S::SposPain2),
    st(S::SposPain2, Sp::Spos, 6, 3, A::Pain, S::SposRun1),
    st(S::SposDie1, Sp::Spos, 7, 5, A::None, S::SposDie2),
    st(S::SposDie2, Sp::Spos, 8, 5, A::Scream, S::SposDie3),
    st(S::SposDie3, Sp::Spos, 9, 5, A::Fall, S::SposDie4),
    st(S::SposDie4, Sp::Spos, 10, 5, A::None, S::SposDie5),
    st(S::SposDie5, Sp::Spos, 11, -1, A::None, S::Null),
    st(S::SposXdie1, Sp::Spos, 12, 5, A::None, S::SposXdie2),
    st(S::SposXdie2, Sp::Spos, 13, 5, A::XScream, S::SposXdie3),
    st(S::SposXdie3, Sp::Spos, 14, 5, A::Fall, S::SposXdie4),
    st(S::SposXdie4, Sp::Spos, 15, 5, A::None, S::SposXdie5),
    st(S::SposXdie5, Sp::Spos, 16, 5, A::None, S::SposXdie6),
    st(S::SposXdie6, Sp::Spos, 17, 5, A::None, S::SposXdie7),
    st(S::SposXdie7, Sp::Spos, 18, 5, A::None, S::SposXdie8),
    st(S::SposXdie8, Sp::Spos, 19, 5, A::None, S::SposXdie9),
    st(S::SposXdie9, Sp::Spos, 20, -1, A::None, S::Null),
    st(S::TrooStnd, Sp::Troo, 0, 10, A::Look, S::TrooStnd2),
    st(S::TrooStnd2, Sp::Troo, 1, 10, A::Look, S::TrooStnd),
    st(S::TrooRun1, Sp::Troo, 0, 3, A::Chase, S::TrooRun2),
    st(S::TrooRun2, Sp::Troo, 0, 3, A::Chase, S::TrooRun3),
    st(S::TrooRun3, Sp::Troo, 1, 3, A::Chase, S::TrooRun4),
    st(S::TrooRun4, Sp::Troo, 1, 3, A::Chase, S::TrooRun5),
    st(S::TrooRun5, Sp::Troo, 2, 3, A::Chase, S::TrooRun6),
    st(S::TrooRun6, Sp::Troo, 2, 3, A::Chase, S::TrooRun7),
    st(S::TrooRun7, Sp::Troo, 3, 3, A::Chase, S::TrooRun8),
    st(S::TrooRun8, Sp::Troo, 3, 3, A::Chase, S::TrooRun1),
    st(S::TrooAtk1, Sp::Troo, 4, 8, A::FaceTarget, S::TrooAtk2),
    st(S::TrooAtk2, Sp::Troo, 5, 8, A::FaceTarget, S::TrooAtk3),
    st(S::TrooAtk3, Sp::Troo, 6, 6, A::TroopAttack, S::TrooRun1),
    st(S::TrooPain, Sp::Troo, 7, 2, A::None, S::TrooPain2),
    st(S::TrooPain2, Sp::Troo, 7, 2, A::Pain, S::TrooRun1),
    st(S::TrooDie1, Sp::Troo, 8, 8, A::None, S::TrooDie2),
    st(S::TrooDie2, Sp::Troo, 9, 8, A::Scream, S::TrooDie3),
    st(S::TrooDie3, Sp::Troo, 10, 6, A::None, S::TrooDie4),
    st(S::TrooDie4, Sp::Troo, 11, 6, A::Fall, S::TrooDie5),
    st(S::TrooDie5, Sp::Troo, 12, -1, A::None, S::Null),
    st(S::TrooXdie1, Sp::Troo, 13, 5, A::None, S::TrooXdie2),
    st(S::TrooXdie2, Sp::Troo, 14, 5, A::XScream, S::TrooXdie3),
    st(S::TrooXdie3, Sp::Troo, 15, 5, A::None, S::TrooXdie4),
    st(S::TrooXdie4, Sp::Troo, 16, 5, A::Fall, S::TrooXdie5),
    st(S::TrooXdie5, Sp::Troo, 17, 5, A::None, S::TrooXdie6),
    st(S::TrooXdie6, Sp::Troo, 18, 5, A::None, S::TrooXdie7),
    st(S::TrooXdie7, Sp::Troo, 19, 5, A::None, S::TrooXdie8),
    st(S::TrooXdie8, Sp::Troo, 20, -1, A::None, S::Null),
    st(S::SargStnd, Sp::Sarg, 0, 10, A::Look, S::SargStnd2),
    st(S::SargStnd2, Sp::Sarg, 1, 10, A::Look, S::SargStnd),
    st(S::SargRun1, Sp::Sarg, 0, 2, A::Chase, S::SargRun2),
    st(S::SargRun2, Sp::Sarg, 0, 2, A::Chase, S::SargRun3),
    st(S::SargRun3, Sp::Sarg, 1, 2, A::Chase, S::SargRun4),
    st(S::SargRun4, Sp::Sarg, 1, 2, A::Chase, S::SargRun5),
    st(S::SargRun5, Sp::Sarg, 2, 2, A::Chase, S::SargRun6),
    st(S::SargRun6, Sp::Sarg, 2, 2, A::Chase, S::SargRun7),
    st(S::SargRun7, Sp::Sarg, 3, 2, A::Chase, S::SargRun8),
    st(S::SargRun8, Sp::Sarg, 3, 2, A::Chase, S::SargRun1),
    st(S::SargAtk1, Sp::Sarg, 4, 8, A::FaceTarget, S::SargAtk2),
    st(S::SargAtk2, Sp::Sarg, 5, 8, A::FaceTarget, S::SargAtk3),
    st(S::SargAtk3, Sp::Sarg, 6, 8, A::SargAttack, S::SargRun1),
    st(S::SargPain, Sp::Sarg, 7, 2, A::None, S::SargPain2),
    st(S::SargPain2, Sp::Sarg, 7, 2, A::Pain, S::SargRun1),
    st(S::SargDie1, Sp::Sarg, 8, 8, A::None, S::SargDie2),
    st(S::SargDie2, Sp::Sarg, 9, 8, A::Scream, S::SargDie3),
    st(S::SargDie3, Sp::Sarg, 10, 4, A::None, S::SargDie4),
    st(S::SargDie4, Sp::Sarg, 11, 4, A::Fall, S::SargDie5),
    st(S::SargDie5, Sp::Sarg, 12, 4, A::None, S::SargDie6),
    st(S::SargDie6, Sp::Sarg, 13, -1, A::None, S::Null),
    st(S::HeadStnd, Sp::Head, 0, 10, A::Look, S::HeadStnd),
    st(S::HeadRun1, Sp::Head, 0, 3, A::Chase, S::HeadRun1),
    st(S::HeadAtk1, Sp::Head, 1, 5, A::FaceTarget, S::HeadAtk2),
    st(S::HeadAtk2, Sp::Head, 2, 5, A::FaceTarget, S::HeadAtk3),
    st(S::HeadAtk3, Sp::Head, 3 | FB, 5, A::HeadAttack, S::HeadRun1),
    st(S::HeadPain, Sp::Head, 4, 3, A::None, S::HeadPain2),
    st(S::HeadPain2, Sp::Head, 4, 3, A::Pain, S::HeadPain3),
    st(S::HeadPain3, Sp::Head, 5, 6, A::None, S::HeadRun1),
    st(S::HeadDie1, Sp::Head, 6, 8, A::None, S::HeadDie2),
    st(S::HeadDie2, Sp::Head, 7, 8, A::Scream, S::HeadDie3),
    st(S::HeadDie3, Sp::Head, 8, 8, A::None, S::HeadDie4),
    st(S::HeadDie4, Sp::Head, 9, 8, A::None, S::HeadDie5),
    st(S::HeadDie5, Sp::Head, 10, 8, A::Fall, S::HeadDie6),
    st(S::HeadDie6, Sp::Head, 11, -1, A::None, S::Null),
    st(S::BossStnd, Sp::Boss, 0, 10, A::Look, S::BossStnd2),
    st(S::BossStnd2, Sp::Boss, 1, 10, A::Look, S::BossStnd),
    st(S::BossRun1, Sp::Boss, 0, 3, A::Chase, S::BossRun2),
    st(S::BossRun2, Sp::Boss, 0, 3, A::Chase, S::BossRun3),
    st(S::BossRun3, Sp::Boss, 1, 3, A::Chase, S::BossRun4),
    st(S::BossRun4, Sp::Boss, 1, 3, A::Chase, S::BossRun5),
    st(S::BossRun5, Sp::Boss, 2, 3, A::Chase, S::BossRun6),
    st(S::BossRun6, Sp::Boss, 2, 3, A::Chase, S::BossRun7),
    st(S::BossRun7, Sp::Boss, 3, 3, A::Chase, S::BossRun8),
    st(S::BossRun8, Sp::Boss, 3, 3, A::Chase, S::BossRun1),
    st(S::BossAtk1, Sp::Boss, 4, 8, A::FaceTarget, S::BossAtk2),
    st(S::BossAtk2, Sp::Boss, 5, 8, A::FaceTarget, S::BossAtk3),
    st(S::BossAtk3, Sp::Boss, 6, 8, A::BruisAttack, S::BossRun1),
    st(S::BossPain, Sp::Boss, 7, 2, A::None, S::BossPain2),
    st(S::BossPain2, Sp::Boss, 7, 2, A::Pain, S::BossRun1),
    st(S::BossDie1, Sp::Boss, 8, 8, A::None, S::BossDie2),
    st(S::BossDie2, Sp::Boss, 9, 8, A::Scream, S::BossDie3),
    st(S::BossDie3, Sp::Boss, 10, 8, A::None, S::BossDie4),
    st(S::BossDie4, Sp::Boss, 11, 8, A::Fall, S::BossDie5),
    st(S::BossDie5, Sp::Boss, 12, 8, A::None, S::BossDie6),
    st(S::BossDie6, Sp::Boss, 13, 8, A::None, S::BossDie7),
    st(S::BossDie7, Sp::Boss, 14, -1, A::BossDeath, S::Null),
    st(S::SkullStnd, Sp::Skul, 0 | FB, 10, A::Look, S::SkullStnd2),
    st(S::SkullStnd2, Sp::Skul, 1 | FB, 10, A::Look, S::SkullStnd),
    st(S::SkullRun1, Sp::Skul, 0 | FB, 6, A::Chase, S::SkullRun2),
    st(S::SkullRun2, Sp::Skul, 1 | FB, 6, A::Chase, S::SkullRun1),
    st(S::SkullAtk1, Sp::Skul, 2 | FB, 10, A::FaceTarget, S::SkullAtk2),
    st(S::SkullAtk2, Sp::Skul, 3 | FB, 4, A::SkullAttack, S::SkullAtk3),
    st(S::SkullAtk3, Sp::Skul, 2 | FB, 4, A::None, S::SkullAtk4),
    st(S::SkullAtk4, Sp::Skul, 3 | FB, 4, A::None, S::SkullAtk3),
    st(S::SkullPain, Sp::Skul, 4 | FB, 3, A::None, S::SkullPain2),
    st(S::SkullPain2, Sp::Skul, 4 | FB, 3, A::Pain, S::SkullRun1),
    st(S::SkullDie1, Sp::Skul, 5 | FB, 6, A::None, S::SkullDie2),
    st(S::SkullDie2, Sp::Skul, 6 | FB, 6, A::Scream, S::SkullDie3),
    st(S::SkullDie3, Sp::Skul, 7 | FB, 6, A::None, S::SkullDie4),
    st(S::SkullDie4, Sp::Skul, 8 | FB, 6, A::Fall, S::SkullDie5),
    st(S::SkullDie5, Sp::Skul, 9 | FB, 6, A::None, S::SkullDie6),
    st(S::SkullDie6, Sp::Skul, 10 | FB, 6, A::None, S::Null),
    st(S::PainStnd, Sp::Pain, 0, 10, A::Look, S::PainStnd),
    st(S::PainRun1, Sp::Pain, 0, 3, A::Chase, S::PainRun2),
    st(S::PainRun2, Sp::Pain, 0, 3, A::Chase, S::PainRun3),
    st(S::PainRun3, Sp::Pain, 1, 3, A::Chase, S::PainRun4),
    st(S::PainRun4, Sp::Pain, 1, 3, A::Chase, S::PainRun5),
    st(S::PainRun5, Sp::Pain, 2, 3, A::Chase, S::PainRun6),
    st(S::PainRun6, Sp::Pain, 2, 3, A::Chase, S::PainRun1),
    st(S::PainAtk1, Sp::Pain, 3, 5, A::FaceTarget, S::PainAtk2),
    st(S::PainAtk2, Sp::Pain, 4, 5, A::FaceTarget, S::PainAtk3),
    st(S::PainAtk3, Sp::Pain, 5 | FB, 5, A::FaceTarget, S::PainAtk4),
    st(S::PainAtk4, Sp::Pain, 5 | FB, 0, A::PainAttack, S::PainRun1),
    st(S::PainPain, Sp::Pain, 6, 6, A::None, S::PainPain2),
    st(S::PainPain2, Sp::Pain, 6, 6, A::Pain, S::PainRun1),
    st(S::PainDie1, Sp::Pain, 7 | FB, 8, A::None, S::PainDie2),
    st(S::PainDie2, Sp::Pain, 8 | FB, 8, A::Scream, S::PainDie3),
    st(S::PainDie3, Sp::Pain, 9 | FB, 8, A::None, S::PainDie4),
    st(S::PainDie4, Sp::Pain, 10 | FB, 8, A::None, S::PainDie5),
    st(S::PainDie5, Sp::Pain, 11 | FB, 8, A::PainDie, S::PainDie6),
    st(S::PainDie6, Sp::Pain, 12 | FB, 8, A::None, S::Null),
    st(S::CyberStnd, Sp::Cybr, 0, 10, A::Look, S::CyberStnd2),
    st(S::CyberStnd2, Sp::Cybr, 1, 10, A::Look, S::CyberStnd),
    st(S::CyberRun1, Sp::Cybr, 0, 3, A::Hoof, S::CyberRun2),
    st(S::CyberRun2, Sp::Cybr, 0, 3, A::Chase, S::CyberRun3),
    st(S::CyberRun3, Sp::Cybr, 1, 3, A::Chase, S::CyberRun4),
    st(S::CyberRun4, Sp::Cybr, 1, 3, A::Chase, S::CyberRun5),
    st(S::CyberRun5, Sp::Cybr, 2, 3, A::Chase, S::CyberRun6),
    st(S::CyberRun6, Sp::Cybr, 2, 3, A::Chase, S::CyberRun7),
    st(S::CyberRun7, Sp::Cybr, 3, 3, A::Metal, S::CyberRun8),
    st(S::CyberRun8, Sp::Cybr, 3, 3, A::Chase, S::CyberRun1),
    st(S::CyberAtk1, Sp::Cybr, 4, 6, A::FaceTarget, S::CyberAtk2),
    st(S::CyberAtk2, Sp::Cybr, 5, 12, A::CyberAttack, S::CyberAtk3),
    st(S::CyberAtk3, Sp::Cybr, 4, 12, A::FaceTarget, S::CyberAtk4),
    st(S::CyberAtk4, Sp::Cybr, 5, 12, A::CyberAttack, S::CyberAtk5),
    st(S::CyberAtk5, Sp::Cybr, 4, 12, A::FaceTarget, S::CyberAtk6),
    st(S::CyberAtk6, Sp::Cybr, 5, 12, A::CyberAttack, S::CyberRun1),
    st(S::CyberPain, Sp::Cybr, 6, 10, A::Pain, S::CyberRun1),
    st(S::CyberDie1, Sp::Cybr, 7, 10, A::None, S::CyberDie2),
    st(S::CyberDie2, Sp::Cybr, 8, 10, A::Scream, S::CyberDie3),
    st(S::CyberDie3, Sp::Cybr, 9, 10, A::None, S::CyberDie4),
    st(S::CyberDie4, Sp::Cybr, 10, 10, A::None, S::CyberDie5),
    st(S::CyberDie5, Sp::Cybr, 11, 10, A::None, S::CyberDie6),
    st(S::CyberDie6, Sp::Cybr, 12, 10, A::Fall, S::CyberDie7),
    st(S::CyberDie7, Sp::Cybr, 13, 10, A::None, S::CyberDie8),
    st(S::CyberDie8, Sp::Cybr, 14, 10, A::None, S::CyberDie9),
    st(S::CyberDie9, Sp::Cybr, 15, 30, A::None, S::CyberDie10),
    st(S::CyberDie10, Sp::Cybr, 15, -1, A::BossDeath, S::Null),
    st(S::SpidStnd, Sp::Spid, 0, 10, A::Look, S::SpidStnd2),
    st(S::SpidStnd2, Sp::Spid, 1, 10, A::Look, S::SpidStnd),
    st(S::SpidRun1, Sp::Spid, 0, 3, A::Metal, S::SpidRun2),
    st(S::SpidRun2, Sp::Spid, 0, 3, A::Chase, S::SpidRun3),
    st(S::SpidRun3, Sp::Spid, 1, 3, A::Chase, S::SpidRun4),
    st(S::SpidRun4, Sp::Spid, 1, 3, A::Chase, S::SpidRun5),
    st(S::SpidRun5, Sp::Spid, 2, 3, A::Metal, S::SpidRun6),
    st(S::SpidRun6, Sp::Spid, 2, 3, A::Chase, S::SpidRun7),
    st(S::SpidRun7, Sp::Spid, 3, 3, A::Chase, S::SpidRun8),
    st(S::SpidRun8, Sp::Spid, 3, 3, A::Chase, S::SpidRun9),
    st(S::SpidRun9, Sp::Spid, 4, 3, A::Metal, S::SpidRun10),
    st(S::SpidRun10, Sp::Spid, 4, 3, A::Chase, S::SpidRun11),
    st(S::SpidRun11, Sp::Spid, 5, 3, A::Chase, S::SpidRun12),
    st(S::SpidRun12, Sp::Spid, 5, 3, A::Chase, S::SpidRun1),
    st(S::SpidAtk1, Sp::Spid, 0 | FB, 20, A::FaceTarget, S::SpidAtk2),
    st(S::SpidAtk2, Sp::Spid, 6 | FB, 4, A::SPosAttack, S::SpidAtk3),
    st(S::SpidAtk3, Sp::Spid, 7 | FB, 4, A::SPosAttack, S::SpidAtk4),
    st(S::SpidAtk4, Sp::Spid, 7 | FB, 1, A::SpidRefire, S::SpidAtk2),
    st(S::SpidPain, Sp::Spid, 8, 3, A::None, S::SpidPain2),
    st(S::SpidPain2, Sp::Spid, 8, 3, A::Pain, S::SpidRun1),
    st(S::SpidDie1, Sp::Spid, 9, 20, A::Scream, S::SpidDie2),
    st(S::SpidDie2, Sp::Spid, 10, 10, A::Fall, S::SpidDie3),
    st(S::SpidDie3, Sp::Spid, 11, 10, A::None, S::SpidDie4),
    st(S::SpidDie4, Sp::Spid, 12, 10, A::None, S::SpidDie5),
    st(S::SpidDie5, Sp::Spid, 13, 10, A::None, S::SpidDie6),
    st(S::SpidDie6, Sp::Spid, 14, 10, A::None, S::SpidDie7),
    st(S::SpidDie7, Sp::Spid, 15, 10, A::None, S::SpidDie8),
    st(S::SpidDie8, Sp::Spid, 16, 10, A::None, S::SpidDie9),
    st(S::SpidDie9, Sp::Spid, 17, 10, A::None, S::SpidDie10),
    st(S::SpidDie10, Sp::Spid, 18, 30, A::None, S::SpidDie11),
    st(S::SpidDie11, Sp::Spid, 18, -1, A::BossDeath, S::Null),
    st(S::FattStnd, Sp::Fatt, 0, 15, A::Look, S::FattStnd2),
    st(S::FattStnd2, Sp::Fatt, 1, 15, A::Look, S::FattStnd),
    st(S::FattRun1, Sp::Fatt, 0, 4, A::Chase, S::FattRun2),
    st(S::FattRun2, Sp::Fatt, 0, 4, A::Chase, S::FattRun3),
    st(S::FattRun3, Sp::Fatt, 1, 4, A::Chase, S::FattRun4),
    st(S::FattRun4, Sp::Fatt, 1, 4, A::Chase, S::FattRun5),
    st(S::FattRun5, Sp::Fatt, 2, 4, A::Chase, S::FattRun6),
    st(S::FattRun6, Sp::Fatt, 2, 4, A::Chase, S::FattRun7),
    st(S::FattRun7, Sp::Fatt, 3, 4, A::Chase, S::FattRun8),
    st(S::FattRun8, Sp::Fatt, 3, 4, A::Chase, S::FattRun9),
    st(S::FattRun9, Sp::Fatt, 4, 4, A::Chase, S::FattRun10),
    st(S::FattRun10, Sp::Fatt, 4, 4, A::Chase, S::FattRun11),
    st(S::FattRun11, Sp::Fatt, 5, 4, A::Chase, S::FattRun12),
    st(S::FattRun12, Sp::Fatt, 5, 4, A::Chase, S::FattRun1),
    st(S::FattAtk1, Sp::Fatt, 6, 20, A::FatRaise, S::FattAtk2),
    st(S::FattAtk2, Sp::Fatt, 7 | FB, 10, A::FatAttack1, S::FattAtk3),
    st(S::FattAtk3, Sp::Fatt, 8, 5, A::FaceTarget, S::FattAtk4),
    st(S::FattAtk4, Sp::Fatt, 6, 5, A::FaceTarget, S::FattAtk5),
    st(S::FattAtk5, Sp::Fatt, 7 | FB, 10, A::FatAttack2, S::FattAtk6),
    st(S::FattAtk6, Sp::Fatt, 8, 5, A::FaceTarget, S::FattAtk7),
    st(S::FattAtk7, Sp::Fatt, 6, 5, A::FaceTarget, S::FattAtk8),
    st(S::FattAtk8, Sp::Fatt, 7 | FB, 10, A::FatAttack3, S::FattAtk9),
    st(S::FattAtk9, Sp::Fatt, 8, 5, A::FaceTarget, S::FattAtk10),
    st(S::FattAtk10, Sp::Fatt, 6, 5, A::FaceTarget, S::FattRun1),
    st(S::FattPain, Sp::Fatt, 9, 3, A::None, S::FattPain2),
    st(S::FattPain2, Sp::Fatt, 9, 3, A::Pain, S::FattRun1),
    st(S::FattDie1, Sp::Fatt, 10, 6, A::None, S::FattDie2),
    st(S::FattDie2, Sp::Fatt, 11, 6, A::Scream, S::FattDie3),
    st(S::FattDie3, Sp::Fatt, 12, 6, A::Fall, S::FattDie4),
    st(S::FattDie4, Sp::Fatt, 13, 6, A::None, S::FattDie5),
    st(S::FattDie5, Sp::Fatt, 14, 6, A::None, S::FattDie6),
    st(S::FattDie6, Sp::Fatt, 15, 6, A::None, S::FattDie7),
    st(S::FattDie7, Sp::Fatt, 16, 6, A::None, S::FattDie8),
    st(S::FattDie8, Sp::Fatt, 17, 6, A::None, S::FattDie9),
    st(S::FattDie9, Sp::Fatt, 18, 6, A::None, S::FattDie10),
    st(S::FattDie10, Sp::Fatt, 19, -1, A::BossDeath, S::Null),
    st(S::SkelStnd, Sp::Skel, 0, 10, A::Look, S::SkelStnd2),
    st(S::SkelStnd2, Sp::Skel, 1, 10, A::Look, S::SkelStnd),
    st(S::SkelRun1, Sp::Skel, 0, 2, A::Chase, S::SkelRun2),
    st(S::SkelRun2, Sp::Skel, 0, 2, A::Chase, S::SkelRun3),
    st(S::SkelRun3, Sp::Skel, 1, 2, A::Chase, S::SkelRun4),
    st(S::SkelRun4, Sp::Skel, 1, 2, A::Chase, S::SkelRun5),
    st(S::SkelRun5, Sp::Skel, 2, 2, A::Chase, S::SkelRun6),
    st(S::SkelRun6, Sp::Skel, 2, 2, A::Chase, S::SkelRun7),
    st(S::SkelRun7, Sp::Skel, 3, 2, A::Chase, S::SkelRun8),
    st(S::SkelRun8, Sp::Skel, 3, 2, A::Chase, S::SkelRun9),
    st(S::SkelRun9, Sp::Skel, 4, 2, A::Chase, S::SkelRun10),
    st(S::SkelRun10, Sp::Skel, 4, 2, A::Chase, S::SkelRun11),
    st(S::SkelRun11, Sp::Skel, 5, 2, A::Chase, S::SkelRun12),
    st(S::SkelRun12, Sp::Skel, 5, 2, A::Chase, S::SkelRun1),
    st(S::SkelFist1, Sp::Skel, 6, 0, A::FaceTarget, S::SkelFist2),
    st(S::SkelFist2, Sp::Skel, 6, 6, A::SkelWhoosh, S::SkelFist3),
    st(S::SkelFist3, Sp::Skel, 7, 6, A::FaceTarget, S::SkelFist4),
    st(S::SkelFist4, Sp::Skel, 8, 6, A::SkelFist, S::SkelRun1),
    st(S::SkelMiss1, Sp::Skel, 9 | FB, 0, A::FaceTarget, S::SkelMiss2),
    st(S::SkelMiss2, Sp::Skel, 9 | FB, 10, A::FaceTarget, S::SkelMiss3),
    st(S::SkelMiss3, Sp::Skel, 10, 10, A::SkelMissile, S::SkelMiss4),
    st(S::SkelMiss4, Sp::Skel, 10, 10, A::FaceTarget, S::SkelRun1),
    st(S::SkelPain, Sp::Skel, 11, 5, A::None, S::SkelPain2),
    st(S::SkelPain2, Sp::Skel, 11, 5, A::Pain, S::SkelRun1),
    st(S::SkelDie1, Sp::Skel, 11, 7, A::None, S::SkelDie2),
    st(S::SkelDie2, Sp::Skel, 12, 7, A::None, S::SkelDie3),
    st(S::SkelDie3, Sp::Skel, 13, 7, A::Scream, S::SkelDie4),
    st(S::SkelDie4, Sp::Skel, 14, 7, A::Fall, S::SkelDie5),
    st(S::SkelDie5, Sp::Skel, 15, 7, A::None, S::SkelDie6),
    st(S::SkelDie6, Sp::Skel, 16, -1, A::None, S::Null),
    st(S::VileStnd, Sp::Vile, 0, 10, A::Look, S::VileStnd2),
    st(S::VileStnd2, Sp::Vile, 1, 10, A::Look, S::VileStnd),
    st(S::VileRun1, Sp::Vile, 0, 2, A::Chase, S::VileRun2),
    st(S::VileRun2, Sp::Vile, 0, 2, A::Chase, S::VileRun3),
    st(S::VileRun3, Sp::Vile, 1, 2, A::Chase, S::VileRun4),
    st(S::VileRun4, Sp::Vile, 1, 2, A::Chase, S::VileRun5),
    st(S::VileRun5, Sp::Vile, 2, 2, A::Chase, S::VileRun6),
    st(S::VileRun6, Sp::Vile, 2, 2, A::Chase, S::VileRun7),
    st(S::VileRun7, Sp::Vile, 3, 2, A::Chase, S::VileRun8),
    st(S::VileRun8, Sp::Vile, 3, 2, A::Chase, S::VileRun9),
    st(S::VileRun9, Sp::Vile, 4, 2, A::Chase, S::VileRun10),
    st(S::VileRun10, Sp::Vile, 4, 2, A::Chase, S::VileRun11),
    st(S::VileRun11, Sp::Vile, 5, 2, A::Chase, S::VileRun12),
    st(S::VileRun12, Sp::Vile, 5, 2, A::Chase, S::VileRun1),
    st(S::VileAtk1, Sp::Vile, 6 | FB, 0, A::VileStart, S::VileAtk2),
    st(S::VileAtk2, Sp::Vile, 6 | FB, 10, A::FaceTarget, S::VileAtk3),
    st(S::VileAtk3, Sp::Vile, 7 | FB, 8, A::FaceTarget, S::VileAtk4),
    st(S::VileAtk4, Sp::Vile, 8 | FB, 8, A::FaceTarget, S::VileAtk5),
    st(S::VileAtk5, Sp::Vile, 9 | FB, 8, A::FaceTarget, S::VileAtk6),
    st(S::VileAtk6, Sp::Vile, 10 | FB, 8, A::FaceTarget, S::VileAtk7),
    st(S::VileAtk7, Sp::Vile, 11 | FB, 8, A::FaceTarget, S::VileAtk8),
    st(S::VileAtk8, Sp::Vile, 12 | FB, 8, A::FaceTarget, S::VileAtk9),
    st(S::VileAtk9, Sp::Vile, 13 | FB, 8, A::FaceTarget, S::VileAtk10),
    st(S::VileAtk10, Sp::Vile, 14 | FB, 8, A::FaceTarget, S::VileAtk11),
    st(S::VileAtk11, Sp::Vile, 15 | FB, 8, A::VileAttack, S::VileAtk12),
    st(S::VileAtk12, Sp::Vile, 15 | FB, 20, A::None, S::VileRun1),
    st(S::VilePain, Sp::Vile, 16, 5, A::None, S::VilePain2),
    st(S::VilePain2, Sp::Vile, 16, 5, A::Pain, S::VileRun1),
    st(S::VileDie1, Sp::Vile, 16, 7, A::None, S::VileDie2),
    st(S::VileDie2, Sp::Vile, 17, 7, A::Scream, S::VileDie3),
    st(S::VileDie3, Sp::Vile, 18, 7, A::Fall, S::VileDie4),
    st(S::VileDie4, Sp::Vile, 19, 7, A::None, S::VileDie5),
    st(S::VileDie5, Sp::Vile, 20, 7, A::None, S::VileDie6),
    st(S::VileDie6, Sp::Vile, 21, 7, A::None, S::VileDie7),
    st(S::VileDie7, Sp::Vile, 22, 7, A::None, S::VileDie8),
    st(S::VileDie8, Sp::Vile, 23, 7, A::None, S::VileDie9),
    st(S::VileDie9, Sp::Vile, 24, 5, A::None, S::VileDie10),
    st(S::VileDie10, Sp::Vile, 25, -1, A::None, S::Null),
    st(S::Tball1, Sp::Bal1, 0 | FB, 4, A::None, S::Tball2),
    st(S::Tball2, Sp::Bal1, 1 | FB, 4, A::None, S::Tball1),
    st(S::Tballx1, Sp::Bal1, 2 | FB, 6, A::None, S::Tballx2),
    st(S::Tballx2, Sp::Bal1, 3 | FB, 6, A::None, S::Tballx3),
    st(S::Tballx3, Sp::Bal1, 4 | FB, 6, A::None, S::Null),
    st(S::Rball1, Sp::Bal2, 0 | FB, 4, A::None, S::Rball2),
    st(S::Rball2, Sp::Bal2, 1 | FB, 4, A::None, S::Rball1),
    st(S::Rballx1, Sp::Bal2, 2 | FB, 6, A::None, S::Rballx2),
    st(S::Rballx2, Sp::Bal2, 3 | FB, 6, A::None, S::Rballx3),
    st(S::Rballx3, Sp::Bal2, 4 | FB, 6, A::None, S::Null),
    st(S::Brball1, Sp::Bal7, 0 | FB, 4, A::None, S::Brball2),
    st(S::Brball2, Sp::Bal7, 1 | FB, 4, A::None, S::Brball1),
    st(S::Brballx1, Sp::Bal7, 2 | FB, 6, A::None, S::Brballx2),
    st(S::Brballx2, Sp::Bal7, 3 | FB, 6, A::None, S::Brballx3),
    st(S::Brballx3, Sp::Bal7, 4 | FB, 6, A::None, S::Null),
    st(S::Rocket, Sp::Misl, 0 | FB, 1, A::None, S::Rocket),
    st(S::Explode1, Sp::Misl, 1 | FB, 8, A::Explode, S::Explode2),
    st(S::Explode2, Sp::Misl, 2 | FB, 6, A::None, S::Explode3),
    st(S::Explode3, Sp::Misl, 3 | FB, 4, A::None, S::Null),
    st(S::Fatshot1, Sp::Manf, 0 | FB, 4, A::None, S::Fatshot2),
    st(S::Fatshot2, Sp::Manf, 1 | FB, 4, A::None, S::Fatshot1),
    st(S::Fatshotx1, Sp::Misl, 1 | FB, 8, A::None, S::Fatshotx2),
    st(S::Fatshotx2, Sp::Misl, 2 | FB, 6, A::None, S::Fatshotx3),
    st(S::Fatshotx3, Sp::Misl, 3 | FB, 4, A::None, S::Null),
    st(S::Tracer, Sp::Fatb, 0 | FB, 2, A::Tracer, S::Tracer2),
    st(S::Tracer2, Sp::Fatb, 1 | FB, 2, A::Tracer, S::Tracer),
    st(S::Traceexp1, Sp::Fbxp, 0 | FB, 8, A::None, S::Traceexp2),
    st(S::Traceexp2, Sp::Fbxp, 1 | FB, 6, A::None, S::Traceexp3),
    st(S::Traceexp3, Sp::Fbxp, 2 | FB, 4, A::None, S::Null),
    st(S::Puff1, Sp::Puff, 0 | FB, 4, A::None, S::Puff2),
    st(S::Puff2, Sp::Puff, 1, 4, A::None, S::Puff3),
    st(S::Puff3, Sp::Puff, 2, 4, A::None, S::Puff4),
    st(S::Puff4, Sp::Puff, 3, 4, A::None, S::Null),
    st(S::Blood1, Sp::Blud, 2, 8, A::None, S::Blood2),
    st(S::Blood2, Sp::Blud, 1, 8, A::None, S::Blood3),
    st(S::Blood3, Sp::Blud, 0, 8, A::None, S::Null),
];
