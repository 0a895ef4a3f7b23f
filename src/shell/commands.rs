//! The fixed command table.

/// What a command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain prose, wrapped to the panel width
    Text(&'static str),
    /// Pre-formatted art, shown verbatim and never wrapped
    Art(&'static str),
}

impl CommandOutput {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandOutput::Text(s) | CommandOutput::Art(s) => s,
        }
    }
}

pub struct CommandEntry {
    pub name: &'static str,
    pub summary: &'static str,
    pub output: CommandOutput,
}

/// Commands handled by the interpreter before table lookup.
pub const CLEAR: &str = "clear";
pub const MATRIX: &str = "matrix";
pub const RESUME: &str = "resume";

pub const MATRIX_MESSAGE: &str = "Entering the matrix... (5 seconds of green rain)";

pub const WELCOME_ART: &str = r"  ____           _   _ _
 |  _ \ _ __ __ _| |_(_) | __
 | |_) | '__/ _` | __| | |/ /
 |  __/| | | (_| | |_| |   <
 |_|   |_|  \__,_|\__|_|_|\_\";

pub const WELCOME_MESSAGE: &str = "Welcome to Pratik's Interactive Terminal!";
pub const WELCOME_HINT: &str = "Type 'help' to see available commands.";

/// Error text for an input that matched nothing. `raw` is the input as typed.
pub fn not_found_message(raw: &str) -> String {
    format!("Command not found: {raw}\nType 'help' to see available commands.")
}

/// Exact-match lookup on a normalized (trimmed, lowercase) command.
pub fn lookup(name: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|entry| entry.name == name)
}

pub const COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "help",
        summary: "Show available commands",
        output: CommandOutput::Text(HELP),
    },
    CommandEntry {
        name: "about",
        summary: "Learn about Pratik",
        output: CommandOutput::Art(ABOUT),
    },
    CommandEntry {
        name: "journey",
        summary: "See career journey timeline",
        output: CommandOutput::Art(JOURNEY),
    },
    CommandEntry {
        name: "skills",
        summary: "View technical skills",
        output: CommandOutput::Art(SKILLS),
    },
    CommandEntry {
        name: "contact",
        summary: "Get contact information",
        output: CommandOutput::Art(CONTACT),
    },
    CommandEntry {
        name: "projects",
        summary: "List featured projects",
        output: CommandOutput::Art(PROJECTS),
    },
    CommandEntry {
        name: "exp",
        summary: "Work experience summary",
        output: CommandOutput::Art(EXPERIENCE),
    },
    CommandEntry {
        name: "education",
        summary: "Educational background",
        output: CommandOutput::Art(EDUCATION),
    },
    CommandEntry {
        name: "awards",
        summary: "Awards and achievements",
        output: CommandOutput::Art(AWARDS),
    },
    CommandEntry {
        name: "social",
        summary: "Social media links",
        output: CommandOutput::Art(SOCIAL),
    },
    CommandEntry {
        name: "resume",
        summary: "Download resume",
        output: CommandOutput::Art(RESUME_TEXT),
    },
    CommandEntry {
        name: "ascii",
        summary: "Show ASCII art",
        output: CommandOutput::Art(ASCII),
    },
    CommandEntry {
        name: "coffee",
        summary: "Essential fuel",
        output: CommandOutput::Art(COFFEE),
    },
];

const HELP: &str = "Available commands:

  about      - Learn about Pratik
  journey    - See career journey timeline
  skills     - View technical skills
  contact    - Get contact information
  projects   - List featured projects
  exp        - Work experience summary
  education  - Educational background
  awards     - Awards and achievements
  social     - Social media links
  resume     - Download resume
  clear      - Clear terminal
  ascii      - Show ASCII art
  matrix     - Enter the matrix
  coffee     - Essential fuel";

const ABOUT: &str = "
┌─────────────────────────────────────────────────────────────┐
│  PRATIK DESAI - Senior Software Engineer                    │
├─────────────────────────────────────────────────────────────┤
│                                                             │
│  7+ years crafting scalable systems in Fintech, Payments,   │
│  and Cybersecurity domains.                                 │
│                                                             │
│  🎯 Engineering graduate turned Tech Leader                 │
│  🚀 Built systems processing millions of transactions       │
│  💡 Founding engineer who scaled startups to $66K/mo        │
│  🛡️  Currently securing enterprises at Securonix            │
│                                                             │
│  Philosophy: \"Write code that tells a story\"                │
│                                                             │
└─────────────────────────────────────────────────────────────┘";

const JOURNEY: &str = "
╔══════════════════════════════════════════════════════════════╗
║                    CAREER JOURNEY                            ║
╠══════════════════════════════════════════════════════════════╣
║                                                              ║
║  2014 ─── 🎓 Engineering Graduate                            ║
║           └── BE/B.Tech from Shivaji University              ║
║                                                              ║
║  2019 ─── 💻 CDAC ACTS Pune                                  ║
║           └── PG Diploma - Pivoted to software               ║
║                                                              ║
║  2019-21 ── 🏆 Volante Technologies                          ║
║           └── IBS Award Winner, payment systems              ║
║                                                              ║
║  2021-24 ── 🚀 TartanHq (Founding Engineer)                  ║
║           └── Built platform generating $66K/mo revenue      ║
║                                                              ║
║  2024-25 ── 💳 Mastercard (Product Engineer)                 ║
║           └── Africa expansion, 10M+ users target            ║
║                                                              ║
║  2026 ─── 🛡️  Securonix (Current)                            ║
║           └── Senior Engineer, SIEM 1M to 2M+ TPS            ║
║                                                              ║
╚══════════════════════════════════════════════════════════════╝";

const SKILLS: &str = "
┌──────────────────────────────────────────────────────────────┐
│                    TECHNICAL ARSENAL                         │
├──────────────────────────────────────────────────────────────┤
│                                                              │
│  LANGUAGES      │ Java ████████████ Expert                   │
│                 │ Python ██████████ Advanced                 │
│                 │ Bash/Shell █████████ Advanced              │
│                 │ SQL ████████████ Expert                    │
│                                                              │
│  BACKEND        │ Spring Boot, Spring Security, Hibernate    │
│                 │ Microservices, REST APIs, gRPC, JUnit      │
│                                                              │
│  MESSAGING      │ Apache Kafka, Nats.io, AWS SQS             │
│                 │ Event-Driven Architecture (EDA)            │
│                                                              │
│  CLOUD/DEVOPS   │ AWS (S3, SQS, EKS, Lambda)                 │
│                 │ GCP, Docker, Kubernetes, Jenkins, CI/CD    │
│                                                              │
│  DATABASES      │ PostgreSQL, MySQL, Redis, DynamoDB         │
│                 │ HBase, SQL Server, Solr                    │
│                                                              │
│  BIG DATA       │ Apache Spark, Hadoop (HDFS), HBase         │
│                                                              │
└──────────────────────────────────────────────────────────────┘";

const CONTACT: &str = "
╔══════════════════════════════════════════════════════════════╗
║                    LET'S CONNECT                             ║
╠══════════════════════════════════════════════════════════════╣
║                                                              ║
║  📧 Email    : pratikvilasdesai@gmail.com                    ║
║  📱 WhatsApp : +91 7588113838                                ║
║  📍 Location : Pune, India                                   ║
║                                                              ║
║  🌐 Website  : https://pratikdesai.dev                       ║
║  💼 LinkedIn : linkedin.com/in/pratikvdesai                  ║
║  🐙 GitHub   : github.com/pratikdesai74                      ║
║                                                              ║
║  💚 Status   : Open to Remote Opportunities                  ║
║                                                              ║
╚══════════════════════════════════════════════════════════════╝";

const PROJECTS: &str = "
┌──────────────────────────────────────────────────────────────┐
│                   FEATURED PROJECTS                          │
├──────────────────────────────────────────────────────────────┤
│                                                              │
│  [1] 💰 PAYMENT WALLET                                       │
│      Full-featured digital wallet with real-time             │
│      transactions, fraud detection, multi-currency           │
│      Tech: Java, Spring Boot, Kafka, PostgreSQL              │
│                                                              │
│  [2] 📄 TALKTOPDF                                            │
│      AI-powered PDF analysis with RAG pipeline               │
│      Tech: Python, FastAPI, LangChain, React                 │
│      Live: talktopdf.pratikdesai.dev                         │
│                                                              │
│  [3] 🎁 PERKS PLATFORM                                       │
│      B2B employee benefits platform                          │
│      Tech: Java, Spring Boot, AWS, PostgreSQL                │
│      Revenue: $66K/month generated                           │
│                                                              │
│  [4] 🎓 MARVEL - CLASS MANAGEMENT                            │
│      Self-hosted on Raspberry Pi + GCP                       │
│      Tech: Java, Spring Boot, Docker, GitHub Actions         │
│                                                              │
└──────────────────────────────────────────────────────────────┘";

const EXPERIENCE: &str = "
┌──────────────────────────────────────────────────────────────┐
│                   WORK EXPERIENCE                            │
├──────────────────────────────────────────────────────────────┤
│                                                              │
│  SECURONIX (Jan 2026 - Present)                              │
│  Senior Software Engineer                                    │
│  └─ Scaling SIEM platform from 1M to 2M+ TPS                │
│  └─ Cybersecurity | UEBA Platform                           │
│                                                              │
│  MASTERCARD (Mar 2024 - Dec 2025)                            │
│  Product Engineer                                            │
│  └─ Africa contactless payment, 10M+ users target           │
│  └─ Multi-region resiliency, 5+ clients onboarded           │
│                                                              │
│  TARTANHQ (Jul 2021 - Mar 2024)                              │
│  Founding Software Engineer                                  │
│  └─ Day 0 role, built Perks platform from scratch           │
│  └─ $66K/mo revenue, 30K users onboarded                    │
│                                                              │
│  VOLANTE TECHNOLOGIES (Feb 2019 - Jul 2021)                  │
│  Software Engineer (Backend)                                 │
│  └─ VolPay - IBS Intelligence Award Winner                  │
│  └─ Payment infrastructure for Goldman Sachs                │
│                                                              │
└──────────────────────────────────────────────────────────────┘";

const EDUCATION: &str = "
┌──────────────────────────────────────────────────────────────┐
│                      EDUCATION                               │
├──────────────────────────────────────────────────────────────┤
│                                                              │
│  🎓 Scaler (2022)                                            │
│     Software Development & Problem Solving                   │
│                                                              │
│  🎓 CDAC ACTS, Pune (2019)                                   │
│     Post Graduate Diploma                                    │
│     └─ Advanced Computing                                    │
│                                                              │
│  🎓 Shivaji University, Kolhapur (2014)                      │
│     BE/B.Tech/BS                                             │
│     └─ Foundation in engineering & problem-solving           │
│                                                              │
└──────────────────────────────────────────────────────────────┘";

const AWARDS: &str = "
╔══════════════════════════════════════════════════════════════╗
║                  AWARDS & RECOGNITION                        ║
╠══════════════════════════════════════════════════════════════╣
║                                                              ║
║  🏆 IBS Intelligence Award                                   ║
║     └─ For VolPay product development for Goldman Sachs     ║
║     └─ Recognized as top payment platform                   ║
║                                                              ║
║  🚀 Founding Engineer Impact - TartanHq                      ║
║     └─ Built platform from 0 to $66K/mo revenue             ║
║     └─ Onboarded 30,000 concurrent users                    ║
║                                                              ║
║  📈 10M+ Users Impacted                                      ║
║     └─ Africa expansion at Mastercard                       ║
║     └─ Enterprise scale across all roles                    ║
║                                                              ║
╚══════════════════════════════════════════════════════════════╝";

const SOCIAL: &str = "
┌──────────────────────────────────────────────────────────────┐
│                    SOCIAL LINKS                              │
├──────────────────────────────────────────────────────────────┤
│                                                              │
│  💼 LinkedIn  → linkedin.com/in/pratikvdesai                 │
│  🐙 GitHub    → github.com/pratikdesai74                     │
│  📝 Medium    → medium.com/@pratikvilasdesai                 │
│  🧩 LeetCode  → leetcode.com/u/pratikvilasdesai              │
│  📧 Email     → pratikvilasdesai@gmail.com                   │
│                                                              │
│  Type 'contact' for more ways to reach out!                  │
│                                                              │
└──────────────────────────────────────────────────────────────┘";

const ASCII: &str = r"
    ____             __  _ __      ____                   _
   / __ \_________ _/ /_(_) /__   / __ \___  _________ _(_)
  / /_/ / ___/ __ `/ __/ / //_/  / / / / _ \/ ___/ __ `/ /
 / ____/ /  / /_/ / /_/ / ,<    / /_/ /  __(__  ) /_/ / /
/_/   /_/   \__,_/\__/_/_/|_|  /_____/\___/____/\__,_/_/

        ╔═══════════════════════════════════════════╗
        ║  Building the future, one commit at a time ║
        ╚═══════════════════════════════════════════╝";

const COFFEE: &str = r"
        ( (
         ) )
      ........
      |      |]
      \      /
       `----'

  ☕ Coffee Level: CRITICAL
  Status: Always coding with caffeine
  Preferred: Black, no sugar

  Fun fact: This portfolio was built with
  approximately 47 cups of coffee.";

const RESUME_TEXT: &str = "
┌──────────────────────────────────────────────────────────────┐
│                    📄 RESUME                                 │
├──────────────────────────────────────────────────────────────┤
│                                                              │
│  Downloading resume...                                       │
│  ████████████████████████████████████ 100%                   │
│                                                              │
│  ✅ Resume will open in a new tab!                           │
│                                                              │
│  Or visit: pratikdesai.dev/resume.pdf                        │
│                                                              │
└──────────────────────────────────────────────────────────────┘";
