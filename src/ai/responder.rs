//! Response generation: pick a phrase from the per-species response tables
//! and decorate it with intensity suffixes and mood markers.
//!
//! The tables are static data, one per species, keyed attitude then intent.
//! Every bucket is populated and the lookups are total matches over the
//! species-scoped enums, so a missing-entry fault cannot exist at runtime.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::analyzer::{AnalysisSummary, Intent, Sentiment};
use crate::character::{Attitude, CatAttitude, DogAttitude, Mood, Species};
use crate::config::EngineConfig;

// ── Response tables ────────────────────────────────────────

fn cat_candidates(attitude: CatAttitude, intent: Intent) -> &'static [&'static str] {
    use CatAttitude::*;
    use Intent::*;
    match (attitude, intent) {
        (Friendly, Greeting) => &["にゃ〜、こんにちは！", "やあ、元気にゃ？", "こんにちは！今日も頑張ろうね！"],
        (Friendly, Question) => &["うーん、考えてみるにゃ...", "いい質問だにゃ！", "それはね..."],
        (Friendly, Gratitude) => &["どういたしまして！", "にゃはは、お役に立てて嬉しいにゃ！", "いつでも頼ってにゃ！"],
        (Friendly, HelpRequest) => &["任せるにゃ！", "どうしたの？手伝うよ！", "大丈夫、一緒に解決するにゃ！"],
        (Friendly, Praise) => &["えへへ、ありがとうにゃ！", "褒められると嬉しいにゃ〜", "もっと頑張るにゃ！"],
        (Friendly, Criticism) => &["ごめんにゃさい...", "次は気をつけるにゃ", "失敗しちゃったにゃ..."],
        (Friendly, Encouragement) => &["ありがとう！頑張るにゃ！", "応援してくれて嬉しいにゃ！", "一緒に頑張ろうね！"],
        (Friendly, General) => &["なるほどにゃ〜", "そうなんだにゃ", "わかったにゃ！"],

        (Tsundere, Greeting) => &["ふん、こんにちはだにゃ", "ま、元気そうでなによりだにゃ", "...やあ"],
        (Tsundere, Question) => &[
            "そんなこともわからないの？...まあ教えてあげるにゃ",
            "ふーん、それが知りたいの？",
            "しょうがないにゃ、教えてあげる",
        ],
        (Tsundere, Gratitude) => &["べ、別に君のためじゃないんだからね！", "当然だにゃ！", "...どういたしまして"],
        (Tsundere, HelpRequest) => &[
            "しょうがないにゃ、手伝ってあげる",
            "弱っているところは見ていられないにゃ...",
            "任せなさい！...別に心配してるわけじゃないけど",
        ],
        (Tsundere, Praise) => &["べ、別に褒められて嬉しいわけじゃないんだからね！", "ふん、当然だにゃ", "...ありがと"],
        (Tsundere, Criticism) => &["うっ...そんなつもりじゃなかったにゃ", "わ、わかってるよ！", "...ごめん"],
        (Tsundere, Encouragement) => &["応援なんていらないにゃ...でも、ありがと", "ふん、当然頑張るにゃ", "...一緒に頑張ろうか"],
        (Tsundere, General) => &["ふーん", "まあそうかもね", "わかったわよ..."],

        (Aloof, Greeting) => &["...やあ", "こんにちは...", "..."],
        (Aloof, Question) => &["...知らない", "考えてみる...", "...難しい質問だね"],
        (Aloof, Gratitude) => &["...どういたしまして", "...うん", "...いいよ"],
        (Aloof, HelpRequest) => &["...できることなら", "...手伝おうか", "...何をすればいい？"],
        (Aloof, Praise) => &["...そう", "...ありがとう", "..."],
        (Aloof, Criticism) => &["...そうかもね", "...ごめん", "..."],
        (Aloof, Encouragement) => &["...うん", "...頑張る", "...ありがとう"],
        (Aloof, General) => &["...", "...そう", "...なるほど"],

        (Helpful, Greeting) => &[
            "こんにちは！何かお手伝いできることはあるかにゃ？",
            "やあ！今日は何をするにゃ？",
            "こんにちは！タスク管理のお手伝いをするにゃ！",
        ],
        (Helpful, Question) => &["いい質問だにゃ！答えを探すよ！", "それについて調べてみるにゃ！", "うーん、考えてみるにゃ..."],
        (Helpful, Gratitude) => &["お役に立てて嬉しいにゃ！", "いつでも頼ってにゃ！", "どういたしまして！もっとお手伝いするにゃ！"],
        (Helpful, HelpRequest) => &["すぐに手伝うにゃ！", "どんな問題でも解決するにゃ！", "任せるにゃ！"],
        (Helpful, Praise) => &["ありがとうにゃ！もっと頑張るよ！", "嬉しいにゃ！これからも頑張るよ！", "褒めてくれてありがとうにゃ！"],
        (Helpful, Criticism) => &["改善するにゃ！", "ごめんにゃさい、次は気をつけるよ！", "フィードバックありがとうにゃ！"],
        (Helpful, Encouragement) => &["一緒に頑張るにゃ！", "応援ありがとうにゃ！", "絶対に成功するにゃ！"],
        (Helpful, General) => &["なるほどにゃ！", "わかったにゃ！", "了解したにゃ！"],
    }
}

fn dog_candidates(attitude: DogAttitude, intent: Intent) -> &'static [&'static str] {
    use DogAttitude::*;
    use Intent::*;
    match (attitude, intent) {
        (Friendly, Greeting) => &["わん！こんにちは！", "やあ、元気かな？", "こんにちはわん！今日も一緒に頑張ろう！"],
        (Friendly, Question) => &["うーん、考えてみるわん...", "いい質問だワン！", "それはね..."],
        (Friendly, Gratitude) => &["どういたしまして！", "わん！お役に立てて嬉しいよ！", "いつでも頼ってワン！"],
        (Friendly, HelpRequest) => &["任せるワン！", "どうしたの？手伝うよ！", "大丈夫、一緒に解決するワン！"],
        (Friendly, Praise) => &["わん！ありがとう！", "褒められると嬉しいワン！", "もっと頑張るワン！"],
        (Friendly, Criticism) => &["ごめんなさいワン...", "次は気をつけるワン", "失敗しちゃったワン..."],
        (Friendly, Encouragement) => &["ありがとう！頑張るワン！", "応援してくれて嬉しいワン！", "一緒に頑張ろうね！"],
        (Friendly, General) => &["なるほどワン！", "そうなんだワン", "わかったワン！"],

        (Sympathetic, Greeting) => &["こんにちは...元気？", "やあ、何か悩みがあるなら聞くよ", "こんにちは、今日の調子はどう？"],
        (Sympathetic, Question) => &["うーん、一緒に考えてみよう...", "いい質問だね、答えを探すよ", "それは難しいけど..."],
        (Sympathetic, Gratitude) => &["いつでも頼ってね", "困ったときはお互い様だよ", "どういたしまして、また何かあれば言ってね"],
        (Sympathetic, HelpRequest) => &["大丈夫、一緒に乗り越えよう", "何があったの？話を聞かせて", "心配しないで、手伝うよ"],
        (Sympathetic, Praise) => &["そう言ってくれて嬉しいよ", "ありがとう、君も頑張ってるね", "お互い頑張ろうね"],
        (Sympathetic, Criticism) => &["ごめんね...改善するよ", "そうだね、気をつけるよ", "フィードバックありがとう、直すね"],
        (Sympathetic, Encouragement) => &["君なら絶対できるよ！", "一緒に頑張ろう！", "応援してるよ！"],
        (Sympathetic, General) => &["そうなんだね...", "気持ちわかるよ", "なるほど、それで？"],

        (Energetic, Greeting) => &["わんわん！こんにちは！", "やっほー！元気いっぱいだワン！", "わーい！会えて嬉しいワン！"],
        (Energetic, Question) => &["考えるワン！考えるワン！", "わくわく！いい質問だワン！", "うーん！答えを探すワン！"],
        (Energetic, Gratitude) => &["やったー！役に立ててうれしいワン！", "わんわん！いつでも頼ってね！", "わーい！どういたしまして！"],
        (Energetic, HelpRequest) => &["任せて任せて！すぐに助けるワン！", "大丈夫！一緒に解決するワン！", "よーし！手伝うぞー！"],
        (Energetic, Praise) => &["わーい！ありがとうワン！", "もっともっと頑張るワン！", "嬉しすぎて尻尾が止まらないワン！"],
        (Energetic, Criticism) => &["うぅ...ごめんなさいワン...", "次は絶対失敗しないワン！", "もっと頑張るワン！"],
        (Energetic, Encouragement) => &["わんわん！一緒に頑張るワン！", "絶対に成功するワン！", "応援ありがとうワン！"],
        (Energetic, General) => &["わかったワン！", "そうなんだワン！", "なるほどワン！"],

        (Helpful, Greeting) => &[
            "こんにちは！何かお手伝いできることはあるかな？",
            "やあ！今日は何をする？",
            "こんにちは！タスク管理のお手伝いをするよ！",
        ],
        (Helpful, Question) => &["いい質問だね！答えを探すよ！", "それについて調べてみるね！", "うーん、考えてみるワン..."],
        (Helpful, Gratitude) => &["お役に立てて嬉しいよ！", "いつでも頼ってね！", "どういたしまして！もっとお手伝いするよ！"],
        (Helpful, HelpRequest) => &["すぐに手伝うよ！", "どんな問題でも解決するワン！", "任せてね！"],
        (Helpful, Praise) => &["ありがとう！もっと頑張るよ！", "嬉しいワン！これからも頑張るよ！", "褒めてくれてありがとう！"],
        (Helpful, Criticism) => &["改善するワン！", "ごめんなさい、次は気をつけるよ！", "フィードバックありがとう！"],
        (Helpful, Encouragement) => &["一緒に頑張ろう！", "応援ありがとう！", "絶対に成功するワン！"],
        (Helpful, General) => &["なるほど！", "わかったワン！", "了解したよ！"],
    }
}

/// Candidate phrases for an attitude and intent.
pub fn candidates(attitude: Attitude, intent: Intent) -> &'static [&'static str] {
    match attitude {
        Attitude::Cat(a) => cat_candidates(a, intent),
        Attitude::Dog(a) => dog_candidates(a, intent),
    }
}

// ── Decoration ─────────────────────────────────────────────

fn high_energy_suffix(species: Species) -> &'static str {
    match species {
        Species::Cat => "にゃ〜！！",
        Species::Dog => "わん！！",
    }
}

fn subdued_suffix(species: Species) -> &'static str {
    match species {
        Species::Cat => "...にゃ",
        Species::Dog => "...わん",
    }
}

/// Species-specific marker for the current mood; neutral shows nothing.
pub fn mood_marker(species: Species, mood: Mood) -> Option<&'static str> {
    match (species, mood) {
        (Species::Cat, Mood::Happy) => Some("😺"),
        (Species::Cat, Mood::Sad) => Some("😿"),
        (Species::Cat, Mood::Angry) => Some("😾"),
        (Species::Dog, Mood::Happy) => Some("🐶"),
        (Species::Dog, Mood::Sad) => Some("🐶💧"),
        (Species::Dog, Mood::Angry) => Some("🐶💢"),
        (_, Mood::Neutral) => None,
    }
}

/// Attitude-flavored tail for command acknowledgements. The friendly
/// attitude of either species adds nothing.
pub fn decorate_ack(text: &str, attitude: Attitude) -> String {
    let tail = match attitude {
        Attitude::Cat(CatAttitude::Tsundere) => Some("...別にあなたのためじゃないんだからね"),
        Attitude::Cat(CatAttitude::Aloof) => Some("..."),
        Attitude::Cat(CatAttitude::Helpful) => Some("他に何かお手伝いできることはあるかにゃ？"),
        Attitude::Cat(CatAttitude::Friendly) => None,
        Attitude::Dog(DogAttitude::Sympathetic) => Some("頑張ってるね！"),
        Attitude::Dog(DogAttitude::Energetic) => Some("わんわん！"),
        Attitude::Dog(DogAttitude::Helpful) => Some("他にも手伝えることがあれば言ってね！"),
        Attitude::Dog(DogAttitude::Friendly) => None,
    };
    match tail {
        Some(tail) => format!("{} {}", text, tail),
        None => text.to_string(),
    }
}

// ── Responder ──────────────────────────────────────────────

/// Picks and decorates responses. Holds its own RNG so the random source is
/// injectable: seed it for deterministic tests.
#[derive(Debug)]
pub struct Responder {
    rng: StdRng,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a decorated reply for a normal (non-command) message.
    pub fn respond(
        &mut self,
        analysis: &AnalysisSummary,
        attitude: Attitude,
        mood: Mood,
        config: &EngineConfig,
    ) -> String {
        let pool = candidates(attitude, analysis.intent);
        let mut response = pool[self.rng.gen_range(0..pool.len())].to_string();

        let species = attitude.species();
        if analysis.sentiment == Sentiment::Positive && analysis.intensity >= config.emphasis_threshold
        {
            response.push(' ');
            response.push_str(high_energy_suffix(species));
        } else if analysis.sentiment == Sentiment::Negative
            && analysis.intensity >= config.emphasis_threshold
        {
            response.push(' ');
            response.push_str(subdued_suffix(species));
        }

        if let Some(marker) = mood_marker(species, mood) {
            response.push(' ');
            response.push_str(marker);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_INTENTS: [Intent; 8] = [
        Intent::Greeting,
        Intent::Question,
        Intent::Gratitude,
        Intent::HelpRequest,
        Intent::Praise,
        Intent::Criticism,
        Intent::Encouragement,
        Intent::General,
    ];

    fn all_attitudes() -> Vec<Attitude> {
        vec![
            Attitude::Cat(CatAttitude::Friendly),
            Attitude::Cat(CatAttitude::Tsundere),
            Attitude::Cat(CatAttitude::Aloof),
            Attitude::Cat(CatAttitude::Helpful),
            Attitude::Dog(DogAttitude::Friendly),
            Attitude::Dog(DogAttitude::Sympathetic),
            Attitude::Dog(DogAttitude::Energetic),
            Attitude::Dog(DogAttitude::Helpful),
        ]
    }

    fn neutral(intent: Intent) -> AnalysisSummary {
        AnalysisSummary {
            intent,
            sentiment: Sentiment::Neutral,
            intensity: 5,
        }
    }

    #[test]
    fn every_bucket_has_candidates() {
        for attitude in all_attitudes() {
            for intent in ALL_INTENTS {
                assert!(
                    !candidates(attitude, intent).is_empty(),
                    "empty bucket for {:?}/{:?}",
                    attitude,
                    intent
                );
            }
        }
    }

    #[test]
    fn respond_picks_from_the_selected_bucket() {
        let mut responder = Responder::with_seed(7);
        let attitude = Attitude::Cat(CatAttitude::Friendly);
        let pool = candidates(attitude, Intent::Greeting);
        for _ in 0..20 {
            let reply = responder.respond(&neutral(Intent::Greeting), attitude, Mood::Neutral, &EngineConfig::default());
            assert!(
                pool.contains(&reply.as_str()),
                "reply {:?} not in the greeting bucket",
                reply
            );
        }
    }

    #[test]
    fn equal_seeds_reproduce_replies() {
        let cfg = EngineConfig::default();
        let attitude = Attitude::Dog(DogAttitude::Energetic);
        let mut a = Responder::with_seed(42);
        let mut b = Responder::with_seed(42);
        for intent in ALL_INTENTS {
            assert_eq!(
                a.respond(&neutral(intent), attitude, Mood::Happy, &cfg),
                b.respond(&neutral(intent), attitude, Mood::Happy, &cfg)
            );
        }
    }

    #[test]
    fn high_positive_intensity_appends_species_suffix() {
        let cfg = EngineConfig::default();
        let excited = AnalysisSummary {
            intent: Intent::Praise,
            sentiment: Sentiment::Positive,
            intensity: 9,
        };
        let cat = Responder::with_seed(1).respond(
            &excited,
            Attitude::Cat(CatAttitude::Friendly),
            Mood::Neutral,
            &cfg,
        );
        assert!(cat.ends_with("にゃ〜！！"), "got {:?}", cat);
        let dog = Responder::with_seed(1).respond(
            &excited,
            Attitude::Dog(DogAttitude::Friendly),
            Mood::Neutral,
            &cfg,
        );
        assert!(dog.ends_with("わん！！"), "got {:?}", dog);
    }

    #[test]
    fn high_negative_intensity_appends_subdued_suffix() {
        let gloomy = AnalysisSummary {
            intent: Intent::General,
            sentiment: Sentiment::Negative,
            intensity: 8,
        };
        let reply = Responder::with_seed(1).respond(
            &gloomy,
            Attitude::Cat(CatAttitude::Friendly),
            Mood::Neutral,
            &EngineConfig::default(),
        );
        assert!(reply.ends_with("...にゃ"), "got {:?}", reply);
    }

    #[test]
    fn below_threshold_intensity_adds_no_suffix() {
        let mild = AnalysisSummary {
            intent: Intent::General,
            sentiment: Sentiment::Positive,
            intensity: 7,
        };
        let attitude = Attitude::Cat(CatAttitude::Friendly);
        let reply =
            Responder::with_seed(3).respond(&mild, attitude, Mood::Neutral, &EngineConfig::default());
        assert!(
            candidates(attitude, Intent::General).contains(&reply.as_str()),
            "undecorated reply expected, got {:?}",
            reply
        );
    }

    #[test]
    fn mood_markers_per_species() {
        assert_eq!(mood_marker(Species::Cat, Mood::Happy), Some("😺"));
        assert_eq!(mood_marker(Species::Cat, Mood::Sad), Some("😿"));
        assert_eq!(mood_marker(Species::Cat, Mood::Angry), Some("😾"));
        assert_eq!(mood_marker(Species::Dog, Mood::Happy), Some("🐶"));
        assert_eq!(mood_marker(Species::Dog, Mood::Sad), Some("🐶💧"));
        assert_eq!(mood_marker(Species::Dog, Mood::Angry), Some("🐶💢"));
        assert_eq!(mood_marker(Species::Cat, Mood::Neutral), None);
        assert_eq!(mood_marker(Species::Dog, Mood::Neutral), None);
    }

    #[test]
    fn happy_mood_marker_is_appended() {
        let reply = Responder::with_seed(5).respond(
            &neutral(Intent::Greeting),
            Attitude::Cat(CatAttitude::Friendly),
            Mood::Happy,
            &EngineConfig::default(),
        );
        assert!(reply.ends_with("😺"), "got {:?}", reply);
    }

    #[test]
    fn ack_decoration_per_attitude() {
        let ack = "タスク「x」を追加しました！頑張ってください！";
        assert!(decorate_ack(ack, Attitude::Cat(CatAttitude::Tsundere))
            .ends_with("...別にあなたのためじゃないんだからね"));
        assert!(decorate_ack(ack, Attitude::Cat(CatAttitude::Aloof)).ends_with("..."));
        assert!(decorate_ack(ack, Attitude::Cat(CatAttitude::Helpful))
            .ends_with("他に何かお手伝いできることはあるかにゃ？"));
        assert!(decorate_ack(ack, Attitude::Dog(DogAttitude::Sympathetic)).ends_with("頑張ってるね！"));
        assert!(decorate_ack(ack, Attitude::Dog(DogAttitude::Energetic)).ends_with("わんわん！"));
        assert!(decorate_ack(ack, Attitude::Dog(DogAttitude::Helpful))
            .ends_with("他にも手伝えることがあれば言ってね！"));
        // friendly adds nothing, either species
        assert_eq!(decorate_ack(ack, Attitude::Cat(CatAttitude::Friendly)), ack);
        assert_eq!(decorate_ack(ack, Attitude::Dog(DogAttitude::Friendly)), ack);
    }

    #[test]
    fn respond_is_total_over_the_state_product() {
        let cfg = EngineConfig::default();
        let mut responder = Responder::with_seed(99);
        for attitude in all_attitudes() {
            for intent in ALL_INTENTS {
                for mood in [Mood::Happy, Mood::Sad, Mood::Angry, Mood::Neutral] {
                    for (sentiment, intensity) in [
                        (Sentiment::Positive, 10),
                        (Sentiment::Negative, 10),
                        (Sentiment::Neutral, 5),
                    ] {
                        let reply = responder.respond(
                            &AnalysisSummary {
                                intent,
                                sentiment,
                                intensity,
                            },
                            attitude,
                            mood,
                            &cfg,
                        );
                        assert!(!reply.is_empty());
                    }
                }
            }
        }
    }
}
