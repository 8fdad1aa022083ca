//! Chat session: the stateful shell around the analysis core.
//!
//! One session per conversation. It owns the character state, the analysis
//! history, the planner and the responder, and exposes the single
//! `handle_message` entry point a UI calls for every user input. Routing:
//! while onboarding is open, inputs are setup answers; afterwards a leading
//! `#` goes to the command dispatcher and everything else through the
//! analyze → attitude → mood → respond pipeline.

use chrono::NaiveDate;

use crate::ai::{
    analyze, decorate_ack, mood_after_message, mood_from_report, next_attitude, AnalysisHistory,
    Responder,
};
use crate::character::{CharacterState, Personality, Species};
use crate::commands::{parse, Command, CommandError, PlannerStore};
use crate::config::EngineConfig;

/// The onboarding questions, asked in order. The first answer decides the
/// personality, the last one the species.
pub const SETUP_QUESTIONS: [&str; 4] = [
    "朝は得意？それとも夜が好き？",
    "どんなタイプの仕事が好き？",
    "最近、楽しいと感じたのはどんな時？",
    "猫と犬、どちらが好き？",
];

/// Accumulates setup answers until the profile is decided.
#[derive(Debug, Clone, Default)]
struct Onboarding {
    answers: Vec<String>,
}

enum OnboardingStep {
    NextQuestion(&'static str),
    Complete {
        species: Species,
        personality: Personality,
    },
}

impl Onboarding {
    fn current_question(&self) -> &'static str {
        SETUP_QUESTIONS[self.answers.len().min(SETUP_QUESTIONS.len() - 1)]
    }

    fn answer(&mut self, text: &str) -> OnboardingStep {
        self.answers.push(text.to_string());
        if self.answers.len() < SETUP_QUESTIONS.len() {
            OnboardingStep::NextQuestion(SETUP_QUESTIONS[self.answers.len()])
        } else {
            OnboardingStep::Complete {
                species: Species::from_answer(text),
                personality: Personality::from_rhythm_answer(&self.answers[0]),
            }
        }
    }
}

pub struct ChatSession {
    config: EngineConfig,
    character: CharacterState,
    history: AnalysisHistory,
    planner: PlannerStore,
    responder: Responder,
    onboarding: Option<Onboarding>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// A fresh session that starts in onboarding.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            character: CharacterState::default(),
            history: AnalysisHistory::new(),
            planner: PlannerStore::new(),
            responder: Responder::new(),
            onboarding: Some(Onboarding::default()),
        }
    }

    /// A session with a decided profile, skipping onboarding.
    pub fn with_profile(species: Species, personality: Personality) -> Self {
        Self {
            character: CharacterState::new(species, personality),
            onboarding: None,
            ..Self::new()
        }
    }

    /// Replace the response RNG with a seeded one for deterministic replies.
    pub fn seed_responses(&mut self, seed: u64) {
        self.responder = Responder::with_seed(seed);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    pub fn character(&self) -> &CharacterState {
        &self.character
    }

    pub fn history(&self) -> &AnalysisHistory {
        &self.history
    }

    pub fn planner(&self) -> &PlannerStore {
        &self.planner
    }

    pub fn is_onboarding(&self) -> bool {
        self.onboarding.is_some()
    }

    /// The question the session is currently waiting on, if onboarding.
    pub fn current_question(&self) -> Option<&'static str> {
        self.onboarding.as_ref().map(|o| o.current_question())
    }

    /// Explicit species change; remaps the attitude to friendly.
    pub fn set_species(&mut self, species: Species) {
        self.character.set_species(species);
    }

    /// Handle one user input and produce the character's reply. Blank input
    /// yields an empty reply, which callers should drop.
    pub fn handle_message(&mut self, text: &str) -> String {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        if let Some(mut onboarding) = self.onboarding.take() {
            match onboarding.answer(trimmed) {
                OnboardingStep::NextQuestion(question) => {
                    self.onboarding = Some(onboarding);
                    question.to_string()
                }
                OnboardingStep::Complete {
                    species,
                    personality,
                } => {
                    self.character = CharacterState::new(species, personality);
                    tracing::debug!(?species, ?personality, "onboarding complete");
                    setup_complete_message(species, personality)
                }
            }
        } else if trimmed.starts_with('#') {
            self.handle_command(trimmed)
        } else {
            self.handle_chat(trimmed)
        }
    }

    fn handle_chat(&mut self, text: &str) -> String {
        let analysis = analyze(text);
        let summary = analysis.summary();
        self.history.push(summary);

        let current = self.character.attitude();
        let next = next_attitude(current, &self.history, &self.config);
        if next != current {
            tracing::debug!(from = ?current, to = ?next, "attitude transition");
            self.character.set_attitude(next);
        }

        let mood = mood_after_message(self.character.mood(), &summary, &self.config);
        self.character.set_mood(mood);

        self.responder
            .respond(&summary, self.character.attitude(), mood, &self.config)
    }

    fn handle_command(&mut self, input: &str) -> String {
        tracing::debug!(%input, "command dispatch");
        let ack = match parse(input) {
            Ok(command) => self.execute(command),
            Err(error) => reply_for_error(&error),
        };
        decorate_ack(&ack, self.character.attitude())
    }

    fn execute(&mut self, command: Command) -> String {
        match command {
            Command::AddTask { title } => {
                self.planner.add_task(&title);
                format!("タスク「{}」を追加しました！頑張ってください！", title)
            }
            Command::AddSchedule { date, time, title } => {
                self.planner.add_schedule(date, time, &title);
                format!(
                    "{} {}に「{}」の予定を追加しました！忘れないようにお知らせしますね！",
                    date.format("%Y/%m/%d"),
                    time.format("%H:%M"),
                    title
                )
            }
            Command::CompleteTask { title } => {
                self.planner.complete_task(&title);
                format!("タスク「{}」を完了しました！素晴らしい！", title)
            }
            Command::Status => self.status_report(chrono::Local::now().date_naive()),
            Command::ReportMood { text } => {
                self.character.set_mood(mood_from_report(&text));
                format!("気分は「{}」なんですね。理解しました！", text)
            }
        }
    }

    fn status_report(&self, today: NaiveDate) -> String {
        let tasks: Vec<String> = self
            .planner
            .open_tasks()
            .map(|t| t.title.clone())
            .collect();
        let schedules: Vec<String> = self
            .planner
            .entries_on(today)
            .map(|s| format!("{} {}", s.time.format("%H:%M"), s.title))
            .collect();
        format!(
            "【今日のタスク】\n{}\n\n【今日の予定】\n{}",
            bulleted(&tasks),
            bulleted(&schedules)
        )
    }
}

fn bulleted(lines: &[String]) -> String {
    if lines.is_empty() {
        "なし".to_string()
    } else {
        format!("- {}", lines.join("\n- "))
    }
}

fn reply_for_error(error: &CommandError) -> String {
    match error {
        CommandError::Unknown(_) => "すみません、そのコマンドは理解できませんでした。".to_string(),
        CommandError::MissingArgument { usage } => format!("使い方: {}", usage),
        CommandError::InvalidDate(raw) => format!(
            "日付「{}」が読み取れませんでした。2026/08/06 か 8/6 のように入力してください。",
            raw
        ),
        CommandError::InvalidTime(raw) => format!(
            "時間「{}」が読み取れませんでした。09:00 のように入力してください。",
            raw
        ),
    }
}

fn setup_complete_message(species: Species, personality: Personality) -> String {
    format!(
        "設定完了！{}のキャラクターで、{}性格になりました。\n\n\
         コマンドの使い方:\n\
         #task タスク名 - タスクを追加\n\
         #schedule 日付 時間 予定名 - スケジュールを追加\n\
         #done タスク名 - タスクを完了\n\
         #status - 今日のタスクと予定を表示\n\
         #mood 気分 - 気分を共有",
        species.label_ja(),
        personality.label_ja()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::candidates;
    use crate::character::{Attitude, CatAttitude, DogAttitude, Mood};
    use crate::ai::Intent;

    #[test]
    fn onboarding_walks_the_questions_then_decides_the_profile() {
        let mut s = ChatSession::new();
        assert!(s.is_onboarding());
        assert_eq!(s.current_question(), Some(SETUP_QUESTIONS[0]));

        assert_eq!(s.handle_message("朝が得意"), SETUP_QUESTIONS[1]);
        assert_eq!(s.handle_message("コツコツ系"), SETUP_QUESTIONS[2]);
        assert_eq!(s.handle_message("散歩してるとき"), SETUP_QUESTIONS[3]);

        let done = s.handle_message("猫のほうが好き");
        assert!(done.starts_with("設定完了！猫のキャラクターで、元気性格になりました。"));
        assert!(done.contains("#task タスク名"));
        assert!(!s.is_onboarding());
        assert_eq!(s.character().species(), Species::Cat);
        assert_eq!(s.character().personality(), Personality::Energetic);
        assert_eq!(s.character().attitude(), Attitude::Cat(CatAttitude::Friendly));
        assert_eq!(s.character().mood(), Mood::Happy);
    }

    #[test]
    fn night_owl_dog_profile() {
        let mut s = ChatSession::new();
        s.handle_message("夜型です");
        s.handle_message("企画");
        s.handle_message("ゲーム中");
        let done = s.handle_message("犬");
        assert!(done.contains("犬のキャラクターで、落ち着いた性格"));
        assert_eq!(s.character().species(), Species::Dog);
        assert_eq!(s.character().personality(), Personality::Calm);
    }

    #[test]
    fn first_greeting_gets_a_friendly_reply_with_happy_marker() {
        let mut s = ChatSession::with_profile(Species::Cat, Personality::Friendly);
        s.seed_responses(11);
        let reply = s.handle_message("こんにちは");
        let base = reply.strip_suffix(" 😺").expect("happy marker expected");
        let pool = candidates(Attitude::Cat(CatAttitude::Friendly), Intent::Greeting);
        assert!(pool.contains(&base), "unexpected base reply {:?}", base);
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn blank_input_yields_no_reply() {
        let mut s = ChatSession::with_profile(Species::Cat, Personality::Friendly);
        assert_eq!(s.handle_message("   "), "");
        assert!(s.history().is_empty());
    }

    #[test]
    fn commands_skip_the_analyzer() {
        let mut s = ChatSession::with_profile(Species::Cat, Personality::Friendly);
        s.handle_message("#task 資料作成");
        assert!(s.history().is_empty(), "commands must not enter the history");
    }

    #[test]
    fn task_lifecycle_through_commands() {
        let mut s = ChatSession::with_profile(Species::Dog, Personality::Friendly);
        let ack = s.handle_message("#task 資料作成");
        assert!(ack.contains("タスク「資料作成」を追加しました！"));
        assert_eq!(s.planner().open_tasks().count(), 1);

        let ack = s.handle_message("#done 資料作成");
        assert!(ack.contains("タスク「資料作成」を完了しました！"));
        assert_eq!(s.planner().open_tasks().count(), 0);
    }

    #[test]
    fn schedule_command_stores_and_acknowledges() {
        let mut s = ChatSession::with_profile(Species::Cat, Personality::Friendly);
        let ack = s.handle_message("#schedule 2026/08/06 09:00 チーム会議");
        assert!(
            ack.contains("2026/08/06 09:00に「チーム会議」の予定を追加しました！"),
            "got {:?}",
            ack
        );
        assert_eq!(s.planner().schedules().len(), 1);
    }

    #[test]
    fn status_lists_open_tasks_and_todays_schedule() {
        let mut s = ChatSession::with_profile(Species::Cat, Personality::Friendly);
        s.handle_message("#task 買い物");
        let today = chrono::Local::now().date_naive();
        let cmd = format!("#schedule {} 09:00 会議", today.format("%Y/%m/%d"));
        s.handle_message(&cmd);

        let status = s.handle_message("#status");
        assert!(status.contains("【今日のタスク】\n- 買い物"), "got {:?}", status);
        assert!(status.contains("【今日の予定】\n- 09:00 会議"), "got {:?}", status);
    }

    #[test]
    fn empty_status_shows_placeholders() {
        let mut s = ChatSession::with_profile(Species::Cat, Personality::Friendly);
        let status = s.handle_message("#status");
        assert_eq!(status, "【今日のタスク】\nなし\n\n【今日の予定】\nなし");
    }

    #[test]
    fn mood_command_shifts_the_mood() {
        let mut s = ChatSession::with_profile(Species::Cat, Personality::Friendly);
        let ack = s.handle_message("#mood 疲れた");
        assert!(ack.contains("気分は「疲れた」なんですね。理解しました！"));
        assert_eq!(s.character().mood(), Mood::Sad);

        s.handle_message("#mood 平常どおり");
        assert_eq!(s.character().mood(), Mood::Neutral);
    }

    #[test]
    fn unknown_command_gets_the_apology() {
        let mut s = ChatSession::with_profile(Species::Cat, Personality::Friendly);
        let reply = s.handle_message("#remind 09:00");
        assert!(reply.contains("すみません、そのコマンドは理解できませんでした。"));
    }

    #[test]
    fn missing_argument_gets_a_usage_hint() {
        let mut s = ChatSession::with_profile(Species::Cat, Personality::Friendly);
        let reply = s.handle_message("#task");
        assert!(reply.contains("使い方: #task タスク名"), "got {:?}", reply);
    }

    #[test]
    fn warm_streak_turns_cat_tsundere_and_flavors_acks() {
        let mut s = ChatSession::with_profile(Species::Cat, Personality::Friendly);
        s.seed_responses(3);
        for _ in 0..3 {
            s.handle_message("とても嬉しい");
        }
        assert_eq!(s.character().attitude(), Attitude::Cat(CatAttitude::Tsundere));
        assert_eq!(s.character().mood(), Mood::Happy);

        let ack = s.handle_message("#task 片付け");
        assert!(
            ack.ends_with("...別にあなたのためじゃないんだからね"),
            "got {:?}",
            ack
        );
    }

    #[test]
    fn criticism_turns_dog_sympathetic() {
        let mut s = ChatSession::with_profile(Species::Dog, Personality::Friendly);
        s.seed_responses(3);
        s.handle_message("違うよ");
        s.handle_message("それも違う");
        assert_eq!(
            s.character().attitude(),
            Attitude::Dog(DogAttitude::Sympathetic)
        );
        let ack = s.handle_message("#done 散歩");
        assert!(ack.ends_with("頑張ってるね！"), "got {:?}", ack);
    }

    #[test]
    fn question_streak_turns_helpful() {
        let mut s = ChatSession::with_profile(Species::Cat, Personality::Friendly);
        s.seed_responses(3);
        s.handle_message("これは何");
        s.handle_message("どうして");
        s.handle_message("教えて");
        assert_eq!(s.character().attitude(), Attitude::Cat(CatAttitude::Helpful));
    }

    #[test]
    fn species_change_resets_attitude() {
        let mut s = ChatSession::with_profile(Species::Cat, Personality::Friendly);
        for _ in 0..3 {
            s.handle_message("とても嬉しい");
        }
        assert_eq!(s.character().attitude(), Attitude::Cat(CatAttitude::Tsundere));
        s.set_species(Species::Dog);
        assert_eq!(s.character().attitude(), Attitude::Dog(DogAttitude::Friendly));
    }

    #[test]
    fn criticism_message_makes_the_character_angry() {
        let mut s = ChatSession::with_profile(Species::Cat, Personality::Friendly);
        s.seed_responses(3);
        // 「違う」 is criticism intent with no sentiment-word match.
        s.handle_message("違う");
        assert_eq!(s.character().mood(), Mood::Angry);
    }
}
