//! Built-in diagram markup: the guaranteed-renderable placeholder plus a small
//! catalog of example description/markup pairs for seeding editors.

/// Fixed, always-valid placeholder shown instead of a blank error screen when a
/// render cycle fails terminally. Must stay renderable under the standard
/// profile; a service that cannot render this is considered broken.
pub const PLACEHOLDER_DIAGRAM: &str = r#"flowchart TB

    A["User Input Received"] --> B{"Is input shorter than 20 characters?"}

    B -- Yes --> X["Show This Flow Diagram"]
    B -- No --> C["Send Description to LLM"]

    C --> D{"Did LLM create valid Mermaid code?"}
    D -- Yes --> E["Generate Your Awesome Diagram!"]
    D -- No --> X

    %% Styling for important decision/failure nodes
    style A stroke:#D50000
    style B stroke:#D50000
    style D stroke:#D50000
    style X stroke:#D50000"#;

/// A named example pairing a prose description with the markup it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub label: &'static str,
    pub description: &'static str,
    pub markup: &'static str,
}

/// Built-in examples, one per supported diagram family.
pub fn builtin_examples() -> &'static [Example] {
    &[
        Example {
            label: "Flowchart",
            description: "A troubleshooting flow for a lamp. It checks if the lamp is plugged in and if the bulb is burned out to determine whether to plug it in, replace the bulb, or repair the lamp.",
            markup: "graph TD\n    A[Lamp doesn't work] --> B{Is lamp plugged in?}\n    B -- No --> C[Plug in lamp]\n    B -- Yes --> D{Bulb burned out?}\n    D -- Yes --> E[Replace bulb]\n    D -- No --> F[Repair lamp]",
        },
        Example {
            label: "Sequence",
            description: "A web request sequence. The User enters a URL in the Browser, which sends a Request to the Server. The Server queries the Database, gets Data back, and sends a Response to the Browser to render.",
            markup: "sequenceDiagram\n    actor User\n    participant Browser\n    participant Server\n    participant Database\n    \n    User->>Browser: Enters URL\n    Browser->>Server: HTTP Request\n    Server->>Database: Query Data\n    Database-->>Server: Return Data\n    Server-->>Browser: HTTP Response\n    Browser-->>User: Render Page",
        },
        Example {
            label: "State Diagram",
            description: "A state machine for a traffic light system. It cycles through Green, Yellow, and Red states, with specific transitions defined for each phase.",
            markup: "stateDiagram-v2\n    [*] --> Green\n    Green --> Yellow\n    Yellow --> Red\n    Red --> Green",
        },
        Example {
            label: "Class Diagram",
            description: "A class diagram representing a simple banking system. It defines the structure and relationships between Bank, Account, and Customer classes.",
            markup: "classDiagram\n    class Bank {\n        +String name\n        +getAccounts()\n    }\n    class Account {\n        +String owner\n        +BigDecimal balance\n        +deposit(amount)\n        +withdraw(amount)\n    }\n    class Customer {\n        +String name\n        +String address\n    }\n    Bank \"1\" -- \"*\" Account : manages\n    Customer \"1\" -- \"*\" Account : owns",
        },
        Example {
            label: "Entity Relationship",
            description: "An ER diagram for an e-commerce database. It maps the relationships between Customers, Orders, and Line Items using standard cardinality notation.",
            markup: "erDiagram\n    CUSTOMER ||--o{ ORDER : places\n    ORDER ||--|{ LINE-ITEM : contains\n    CUSTOMER }|..|{ DELIVERY-ADDRESS : uses",
        },
        Example {
            label: "User Journey",
            description: "A typical day routine modeled as a User Journey. It tracks satisfaction scores (1-5) across different activities like sleeping, commuting, working, and going home.",
            markup: "journey\n    title A Typical Work Day\n    section Morning\n      Wake up: 3: Me, Cat\n      Coffee: 5: Me\n      Commute: 1: Me\n    section Work\n      Meetings: 2: Me\n      Coding: 5: Me\n    section Evening\n      Go home: 4: Me\n      Sleep: 5: Me, Cat",
        },
        Example {
            label: "Timeline",
            description: "A product launch timeline spanning 2023 and 2024. It visualizes phases from Strategy & Concept, through Design & Development, to the final Launch and Marketing campaigns.",
            markup: "timeline\n    title Product Launch Timeline\n    2023 Q1 : Strategy\n            : Concept\n    2023 Q2 : Design\n            : Prototyping\n    2023 Q3 : Development\n            : Testing\n    2023 Q4 : Launch\n            : Marketing",
        },
        Example {
            label: "Gantt Chart",
            description: "A project schedule for a website redesign. It tracks the timeline for Wireframing, UI Design, Backend, and Frontend development phases.",
            markup: "gantt\n    title Website Redesign\n    dateFormat  YYYY-MM-DD\n    section Design\n    Wireframes      :a1, 2024-01-01, 7d\n    UI Visuals      :after a1, 10d\n    section Dev\n    Backend         :2024-01-10, 15d\n    Frontend        :2024-01-15, 12d",
        },
        Example {
            label: "Pie Chart",
            description: "A simple pie chart visualizing the distribution of bugs reported by severity level in a software project.",
            markup: "pie title Bug Severity Distribution\n    \"Critical\" : 5\n    \"Major\" : 15\n    \"Minor\" : 45\n    \"Trivial\" : 35",
        },
        Example {
            label: "Mindmap",
            description: "A mindmap organizing a marketing strategy. It breaks down into Digital, Print, and Event channels with sub-strategies for each.",
            markup: "mindmap\n  root((Marketing))\n    Digital\n      Social Media\n      SEO\n      Email\n    Print\n      Flyers\n      Billboards\n    Events\n      Webinars\n      Conferences",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::sanitize;

    #[test]
    fn placeholder_diagram_is_nonempty_and_survives_sanitization() {
        assert!(!PLACEHOLDER_DIAGRAM.trim().is_empty());
        // The placeholder uses properly quoted labels already; the repair pass
        // must not disturb it.
        assert_eq!(sanitize(PLACEHOLDER_DIAGRAM), PLACEHOLDER_DIAGRAM);
    }

    #[test]
    fn builtin_examples_have_distinct_labels_and_renderable_shape() {
        let examples = builtin_examples();
        assert!(!examples.is_empty());
        for (i, ex) in examples.iter().enumerate() {
            assert!(!ex.label.is_empty());
            assert!(!ex.markup.trim().is_empty());
            for other in &examples[i + 1..] {
                assert_ne!(ex.label, other.label);
            }
        }
    }
}
