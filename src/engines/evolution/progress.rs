use std::sync::mpsc::Sender;

pub trait ProgressCallback: Send {
    /// `round` is 1-based; 0 is the optional start round
    fn on_round_start(&mut self, round: usize, total_rounds: usize);
    fn on_candidate_processed(&mut self, candidate_num: usize, total: usize);
    fn on_round_complete(&mut self, round: usize, best_score: f64, population_size: usize);
}

pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_round_start(&mut self, round: usize, total_rounds: usize) {
        if round == 0 {
            println!("Processing start round");
        } else {
            println!("Processing round {}/{}", round, total_rounds);
        }
    }

    fn on_candidate_processed(&mut self, candidate_num: usize, total: usize) {
        if candidate_num % 10 == 0 || candidate_num == total {
            println!("  Processed {}/{} problems", candidate_num, total);
        }
    }

    fn on_round_complete(&mut self, round: usize, best_score: f64, population_size: usize) {
        println!(
            "Round {} complete. Best score: {:.4}, population: {}",
            round, best_score, population_size
        );
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    RoundStart { round: usize, total_rounds: usize },
    CandidateProcessed { current: usize, total: usize },
    RoundComplete { round: usize, best_score: f64, population_size: usize },
}

/// Forwards progress to another thread, e.g. a dashboard or test harness
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_round_start(&mut self, round: usize, total_rounds: usize) {
        let _ = self.sender.send(ProgressMessage::RoundStart { round, total_rounds });
    }

    fn on_candidate_processed(&mut self, candidate_num: usize, total: usize) {
        let _ = self.sender.send(ProgressMessage::CandidateProcessed {
            current: candidate_num,
            total,
        });
    }

    fn on_round_complete(&mut self, round: usize, best_score: f64, population_size: usize) {
        let _ = self.sender.send(ProgressMessage::RoundComplete {
            round,
            best_score,
            population_size,
        });
    }
}
