//! "Journey Through Time" milestone navigator.
//!
//! A bounded cursor over a fixed list of career stops. Visiting a stop for
//! the first time unlocks it and raises a short-lived achievement notice.

use crate::services::time_source::SharedTimeSource;
use crate::services::timer::Deadline;
use crossterm::event::{KeyCode, KeyEvent};
use std::collections::BTreeSet;
use std::time::Duration;

pub const ACHIEVEMENT_DURATION: Duration = Duration::from_secs(2);
pub const ACHIEVEMENT_TITLE: &str = "New Chapter Unlocked!";

#[derive(Debug)]
pub struct JourneyStop {
    pub year: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    /// Accent color as RGB
    pub color: (u8, u8, u8),
    pub achievements: &'static [&'static str],
    pub tech_stack: Option<&'static [&'static str]>,
}

pub static STOPS: [JourneyStop; 6] = [
    JourneyStop {
        year: "2014",
        title: "The Origin",
        subtitle: "Mechanical Engineering - Shivaji University",
        description: "Completed B.Tech in Mechanical Engineering from Shivaji University, Kolhapur. The non-tech to tech journey begins here - building a foundation in problem-solving and analytical thinking.",
        color: (0x22, 0xc5, 0x5e),
        achievements: &["Mechanical Engineering", "Problem-Solving", "Non-Tech Start"],
        tech_stack: None,
    },
    JourneyStop {
        year: "2019",
        title: "The Pivot",
        subtitle: "CDAC ACTS Pune - PG Diploma",
        description: "Made the bold decision to pivot into tech. Completed Post Graduate Diploma in Advanced Computing, mastering software development.",
        color: (0x3b, 0x82, 0xf6),
        achievements: &["PG Diploma", "Java Mastery", "Tech Transition"],
        tech_stack: Some(&["Java", "SQL", "Web Development"]),
    },
    JourneyStop {
        year: "2019-2021",
        title: "First Victory",
        subtitle: "Volante Technologies - Backend Engineer",
        description: "First tech role in enterprise banking. Built VolPay payment features and won the prestigious IBS Intelligence Award for Goldman Sachs project.",
        color: (0xf5, 0x9e, 0x0b),
        achievements: &["IBS Award Winner", "Payment Systems", "Goldman Sachs Project"],
        tech_stack: Some(&["Java", "Spring Boot", "MySQL", "Kafka", "Docker"]),
    },
    JourneyStop {
        year: "2021-2024",
        title: "Startup Mode",
        subtitle: "TartanHq - Founding Engineer",
        description: "Joined as Day 0 founding engineer. Built Perks platform from scratch, onboarded 30,000 users, generated $66K/mo revenue. Achieved 50% AWS cost reduction.",
        color: (0x8b, 0x5c, 0xf6),
        achievements: &["Founding Engineer", "$66K/mo Revenue", "30K Users"],
        tech_stack: Some(&["Java", "Spring Boot", "AWS", "Kafka", "Redis", "DynamoDB"]),
    },
    JourneyStop {
        year: "2024-2025",
        title: "Enterprise Scale",
        subtitle: "Mastercard - Product Engineer",
        description: "Architected Africa expansion targeting 10M+ users. Built multi-region resiliency for instant clearing, onboarded 5+ clients. Designed event-driven library improving processing by 30%.",
        color: (0xef, 0x44, 0x44),
        achievements: &["10M+ Users Target", "5+ Clients", "30% Faster Processing"],
        tech_stack: Some(&["Java", "Spring Boot", "Kafka", "Nats.io", "PostgreSQL", "gRPC"]),
    },
    JourneyStop {
        year: "2026",
        title: "Security Chapter",
        subtitle: "Securonix - Senior Software Engineer",
        description: "Currently scaling high-throughput SIEM platform from 1M to 2M+ TPS. Building next-gen alerting, tracing, and logging for large-scale security analytics.",
        color: (0x06, 0xb6, 0xd4),
        achievements: &["2M+ TPS Scale", "SIEM Platform", "Senior Engineer"],
        tech_stack: Some(&["Java", "Kafka", "Spark", "Hadoop", "HBase", "Kubernetes"]),
    },
];

#[derive(Debug)]
pub struct JourneyNavigator {
    stops: &'static [JourneyStop],
    open: bool,
    current: usize,
    visited: BTreeSet<usize>,
    achievement: Deadline,
    time: SharedTimeSource,
}

impl JourneyNavigator {
    pub fn new(time: SharedTimeSource) -> Self {
        Self::with_stops(&STOPS, time)
    }

    pub fn with_stops(stops: &'static [JourneyStop], time: SharedTimeSource) -> Self {
        Self {
            stops,
            open: false,
            current: 0,
            visited: BTreeSet::from([0]),
            achievement: Deadline::new(),
            time,
        }
    }

    pub fn stops(&self) -> &'static [JourneyStop] {
        self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_stop(&self) -> Option<&'static JourneyStop> {
        self.stops.get(self.current)
    }

    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the modal. The visited set carries over from earlier sessions.
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.achievement.cancel();
    }

    /// Fraction of the journey reached, `(current + 1) / len`.
    pub fn progress(&self) -> f64 {
        if self.stops.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.stops.len() as f64
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: isize) {
        let Ok(index) = usize::try_from(index) else {
            return;
        };
        if index >= self.stops.len() {
            return;
        }
        self.current = index;
        if self.visited.insert(index) {
            tracing::debug!("Journey stop {} unlocked", index);
            self.achievement
                .schedule(self.time.now(), ACHIEVEMENT_DURATION);
        }
    }

    pub fn next(&mut self) {
        self.go_to(self.current as isize + 1);
    }

    pub fn previous(&mut self) {
        self.go_to(self.current as isize - 1);
    }

    /// Title of the stop behind the pending achievement notice.
    pub fn achievement(&self) -> Option<&'static str> {
        if self.achievement.is_pending() {
            self.current_stop().map(|stop| stop.title)
        } else {
            None
        }
    }

    pub fn tick(&mut self) {
        if self.achievement.take_expired(self.time.now()) {
            tracing::trace!("Journey achievement notice expired");
        }
    }

    /// Keys act only while the modal is open. Returns true when consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.open {
            return false;
        }
        match key.code {
            KeyCode::Right => self.next(),
            KeyCode::Left => self.previous(),
            KeyCode::Esc => self.close(),
            KeyCode::Home => self.go_to(0),
            KeyCode::End => self.go_to(self.stops.len() as isize - 1),
            KeyCode::Char(c @ '1'..='9') => self.go_to(c as isize - '1' as isize),
            _ => return false,
        }
        true
    }
}
