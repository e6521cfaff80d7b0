//! Static content of the clinic contact page.

pub struct ContactMethod {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static [&'static str],
    pub description: &'static str,
}

pub struct Highlight {
    pub icon: &'static str,
    pub label: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const ADDRESS: &str = "Rua das Flores, 123 - Vila Madalena, São Paulo/SP";

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        icon: "📞",
        title: "Telefone",
        details: &["(11) 99999-9999", "(11) 88888-8888"],
        description: "Atendimento de segunda a sexta, das 8h às 18h",
    },
    ContactMethod {
        icon: "📧",
        title: "Email",
        details: &["contato@dentalcare.com", "agendamento@dentalcare.com"],
        description: "Resposta em até 24 horas",
    },
    ContactMethod {
        icon: "📍",
        title: "Endereço",
        details: &[
            "Rua das Flores, 123",
            "Vila Madalena - São Paulo/SP",
            "CEP: 01234-567",
        ],
        description: "Estacionamento gratuito disponível",
    },
    ContactMethod {
        icon: "🕒",
        title: "Horário de Funcionamento",
        details: &[
            "Segunda a Sexta: 8h às 18h",
            "Sábado: 8h às 12h",
            "Domingo: Fechado",
        ],
        description: "Emergências: (11) 99999-9999",
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "⚡",
        label: "Resposta em até 24h",
    },
    Highlight {
        icon: "💬",
        label: "Atendimento Personalizado",
    },
    Highlight {
        icon: "🎯",
        label: "Soluções Específicas",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Como agendar uma consulta?",
        answer: "Você pode agendar através do telefone, WhatsApp, email ou preenchendo o formulário acima. Nossa equipe entrará em contato para confirmar o horário.",
    },
    Faq {
        question: "Aceitam convênios?",
        answer: "Sim! Trabalhamos com os principais convênios odontológicos. Entre em contato para verificar se o seu convênio está na lista.",
    },
    Faq {
        question: "Qual o prazo para resposta?",
        answer: "Respondemos em até 24 horas em dias úteis. Para emergências, temos um número específico disponível 24/7.",
    },
    Faq {
        question: "Fazem atendimento de emergência?",
        answer: "Sim! Para emergências odontológicas, temos um número específico que funciona 24 horas por dia, 7 dias por semana.",
    },
];
