//! Built-in condition catalog.
//!
//! Pure data: each record is a symptom cluster with trigger phrases,
//! urgency, and the six advisory texts. Definition order is preserved by
//! the knowledge base and breaks score ties, so new conditions go at the
//! end.

use crate::models::{ConditionRecord, Urgency};

fn phrases(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_string()).collect()
}

/// The full built-in catalog, in definition order.
pub fn builtin_conditions() -> Vec<ConditionRecord> {
    vec![
        ConditionRecord {
            key: "dental".into(),
            keywords: phrases(&[
                "tooth", "teeth", "wisdom tooth", "wisdom teeth", "toothache",
                "gum", "dental", "molar", "cavity", "jaw pain",
            ]),
            urgency: Urgency::Medium,
            label: "Dental Pain".into(),
            causes: "Impacted wisdom tooth (tooth stuck under gum or pressing neighbouring teeth), \
                     dental cavity reaching the nerve (pulpitis), gum infection (pericoronitis), \
                     or a dental abscess (pus pocket at the tooth root)"
                .into(),
            mechanism: "When a wisdom tooth can't erupt fully, a flap of gum covers it and traps \
                        bacteria, causing swelling and throbbing pain. If decay reaches the inner \
                        nerve (pulp), every hot/cold stimulus sends a sharp pain signal."
                .into(),
            advice: "1. Rinse with warm salt water (1 tsp salt in a glass of warm water) every 2-3 hours.\n\
                     2. Take Ibuprofen 400 mg with food every 8 hours for pain and swelling.\n\
                     3. Apply an ice pack on the cheek – 15 min on, 15 min off.\n\
                     4. Eat soft foods (khichdi, dal, curd) and chew on the opposite side.\n\
                     5. Visit a dentist within 48 hours for X-ray and treatment plan."
                .into(),
            home_remedies: "Clove oil on cotton applied to the sore gum numbs pain naturally. \
                            A cold tea bag pressed against the area reduces swelling. \
                            Turmeric paste (haldi + water) on gums has anti-bacterial properties."
                .into(),
            red_flags: "Fever above 101 °F, facial swelling spreading to eye/neck, difficulty \
                        opening mouth or swallowing, pus oozing from gums"
                .into(),
            timeline: "Pain eases in 2-3 days with salt rinses and ibuprofen. If impacted, a \
                       dentist may schedule extraction (recovery: 7-10 days)."
                .into(),
        },
        ConditionRecord {
            key: "tremor".into(),
            keywords: phrases(&[
                "shaking", "tremor", "trembling", "hands shaking", "hand shaking",
                "shivering", "vibrating",
            ]),
            urgency: Urgency::Medium,
            label: "Tremor / Shaking".into(),
            causes: "Pain-triggered adrenaline surge (most common with dental/injury pain), \
                     low blood sugar (skipped meals), excess caffeine or tea, anxiety/stress response, \
                     thyroid over-activity (hyperthyroidism), or essential tremor (neurological)"
                .into(),
            mechanism: "Severe pain makes your brain release adrenaline (fight-or-flight hormone). \
                        This speeds up your heart, tenses muscles, and causes visible trembling. \
                        Low blood sugar starves nerve cells of fuel, making them misfire and twitch."
                .into(),
            advice: "1. If you're in pain, treating the pain (see dental/injury advice) usually stops the shaking.\n\
                     2. Sit down, drink a glass of warm sweet milk or glucose water to raise blood sugar.\n\
                     3. Practice slow breathing: breathe in 4 sec → hold 4 sec → breathe out 6 sec.\n\
                     4. Reduce tea/coffee to max 2 cups a day.\n\
                     5. If tremor persists for more than a week without pain, see a doctor – they'll check thyroid and sugar levels."
                .into(),
            home_remedies: "Warm milk with a teaspoon of ghee before bed calms the nervous system. \
                            Soaked almonds (4-5 overnight) eaten in the morning support nerve health. \
                            Regular walking 30 min/day reduces anxiety-related tremors."
                .into(),
            red_flags: "Tremor only on one side of the body, numbness or weakness in limbs, \
                        slurred speech, confusion"
                .into(),
            timeline: "Stress/pain-related tremors stop within hours once pain is managed. If it \
                       persists beyond 1 week, get blood tests done."
                .into(),
        },
        ConditionRecord {
            key: "headache".into(),
            keywords: phrases(&[
                "headache", "head pain", "migraine", "head hurting", "head ache",
                "temple pain", "forehead pain",
            ]),
            urgency: Urgency::Medium,
            label: "Headache".into(),
            causes: "Tension headache (tight muscles in neck/scalp from stress or screen time), \
                     migraine (neurological, often one-sided with nausea), dehydration, \
                     sinus congestion, eye strain, or high blood pressure"
                .into(),
            mechanism: "Tension headaches: stress tightens muscles around your skull, compressing pain nerves. \
                        Migraines: abnormal brain wave activity dilates blood vessels and inflames nearby nerves, \
                        causing intense pulsing pain, light/sound sensitivity, and sometimes aura (visual disturbance)."
                .into(),
            advice: "1. Drink 2 glasses of water immediately – dehydration is the #1 overlooked cause.\n\
                     2. Take Paracetamol 500 mg (or Ibuprofen 400 mg with food).\n\
                     3. Rest in a dark, quiet room with a cold damp cloth on your forehead.\n\
                     4. Gently massage the temples and back of the neck in slow circles.\n\
                     5. If headaches occur >3 times a week or are the worst you've ever had, see a doctor urgently."
                .into(),
            home_remedies: "Peppermint oil dabbed on temples provides cooling relief. \
                            Strong ginger tea with jaggery can ease migraine nausea. \
                            A pinch of cinnamon paste on the forehead helps with sinus headache."
                .into(),
            red_flags: "Sudden 'thunderclap' worst-ever headache, stiff neck with fever, confusion, \
                        vision loss, weakness on one side"
                .into(),
            timeline: "Tension headache: resolves in 30 min – 4 hours with rest and medication. \
                       Migraines: 4-72 hours."
                .into(),
        },
        ConditionRecord {
            key: "fever".into(),
            keywords: phrases(&[
                "fever", "temperature", "high temp", "bukhar", "burning up",
                "chills", "sweating", "102", "103", "104",
            ]),
            urgency: Urgency::Medium,
            label: "Fever".into(),
            causes: "Viral infection (common cold, flu, COVID-19, dengue), bacterial infection \
                     (throat, urinary, typhoid), malaria (if in endemic area), \
                     or body's inflammatory response to an injury/infection"
                .into(),
            mechanism: "Your immune system detects invading germs and releases chemicals called pyrogens. \
                        These reset your brain's thermostat (hypothalamus) to a higher temperature. \
                        The higher heat slows germ reproduction and boosts white blood cell activity – \
                        that's why you feel hot but shiver (body generating heat to reach the new setpoint)."
                .into(),
            advice: "1. Take Paracetamol 500 mg every 6 hours (do NOT exceed 4 doses/day).\n\
                     2. Sponge forehead, armpits, and neck with lukewarm (not cold) water.\n\
                     3. Drink ORS, coconut water, or lime water – aim for 8-10 glasses/day.\n\
                     4. Wear light cotton clothes, use a thin sheet instead of heavy blankets.\n\
                     5. Record temperature every 4 hours. If it crosses 103 °F or lasts >3 days, see a doctor for blood tests."
                .into(),
            home_remedies: "Tulsi (holy basil) tea with black pepper and honey is a traditional fever reducer. \
                            Rice starch water (kanji) keeps energy up when appetite is low. \
                            A paste of sandalwood on the forehead provides a cooling effect."
                .into(),
            red_flags: "Fever above 103 °F, rash appearing with fever, severe bodyache with low \
                        platelets suspicion (dengue), confusion, difficulty breathing"
                .into(),
            timeline: "Viral fevers: 3-5 days. If no improvement by day 3, get a blood test \
                       (CBC, Widal, Dengue NS1)."
                .into(),
        },
        ConditionRecord {
            key: "chest_pain".into(),
            keywords: phrases(&[
                "chest pain", "chest pressure", "chest tight", "heart pain",
                "heart attack", "crushing pain",
            ]),
            urgency: Urgency::High,
            label: "Chest Pain – EMERGENCY".into(),
            causes: "Heart attack (blocked coronary artery), angina (reduced blood flow), \
                     pulmonary embolism (blood clot in lung), severe acidity/GERD, \
                     or muscle strain in chest wall"
                .into(),
            mechanism: "In a heart attack, a fatty plaque in a heart artery ruptures and a blood clot blocks \
                        blood flow. The heart muscle downstream starts dying within minutes – \
                        this causes crushing chest pain that may radiate to the left arm, jaw, or back."
                .into(),
            advice: "1. CALL 108 (AMBULANCE) IMMEDIATELY.\n\
                     2. Sit upright or in whatever position feels easiest to breathe.\n\
                     3. Chew 1 Aspirin 325 mg (if not allergic) – it helps dissolve the clot.\n\
                     4. Do NOT walk, drive, or exert yourself. Stay calm.\n\
                     5. If the person becomes unconscious and stops breathing, start chest CPR (push hard and fast in the centre of the chest)."
                .into(),
            home_remedies: "There are NO home remedies for heart-related chest pain – get to a hospital. \
                            If the pain is clearly acid-related (burning after meals, relieved by antacid), \
                            try a glass of cold milk or an antacid tablet."
                .into(),
            red_flags: "ALL chest pain must be evaluated urgently. Sweating with chest pain, pain \
                        in left arm/jaw, breathlessness, fainting"
                .into(),
            timeline: "Heart attack: treatment within 90 minutes saves life. Do NOT wait.".into(),
        },
        ConditionRecord {
            key: "stomach".into(),
            keywords: phrases(&[
                "stomach pain", "stomach ache", "abdomen", "belly pain",
                "nausea", "vomiting", "diarrhea", "loose motion",
                "food poisoning", "acidity", "gas", "bloating",
            ]),
            urgency: Urgency::Medium,
            label: "Stomach / Digestive Issue".into(),
            causes: "Gastroenteritis (stomach infection from contaminated food/water), \
                     acidity/GERD (excess stomach acid), food poisoning, \
                     irritable bowel syndrome (IBS), or intestinal worms"
                .into(),
            mechanism: "Contaminated food or water introduces bacteria/viruses that irritate the gut lining. \
                        Your body responds with vomiting and diarrhea to expel the toxins. \
                        Acidity occurs when the stomach produces excess hydrochloric acid that burns the lining."
                .into(),
            advice: "1. Prepare ORS: 1 litre boiled-cooled water + 6 teaspoons sugar + ½ teaspoon salt. Sip every 5 min.\n\
                     2. Do NOT eat solid food for 4-6 hours if vomiting. Then start with plain rice, moong dal water, or curd-rice.\n\
                     3. For acidity: chew 1 antacid tablet (Gelusil/Digene) or take Pantoprazole 40 mg before breakfast.\n\
                     4. Avoid spicy, oily, and dairy foods for 48 hours.\n\
                     5. If you see blood in vomit or stool, have severe cramp pain, or can't keep water down for 12 hours – go to hospital."
                .into(),
            home_remedies: "Jeera (cumin) water: boil 1 tsp cumin in water for 5 min – soothes stomach. \
                            Ajwain (carom seeds) with black salt relieves gas and bloating. \
                            Plain curd with rice is the easiest food to digest during recovery."
                .into(),
            red_flags: "Blood in vomit or stool, severe dehydration (dry mouth, no urine >8 hrs), \
                        high fever with stomach pain, rigid/hard abdomen"
                .into(),
            timeline: "Food poisoning: 12-48 hours. Gastroenteritis: 2-3 days. Acidity: improves \
                       in 1-2 days with medication."
                .into(),
        },
        ConditionRecord {
            key: "respiratory".into(),
            keywords: phrases(&[
                "cough", "cold", "flu", "runny nose", "congestion", "sore throat",
                "sneezing", "blocked nose", "phlegm", "mucus",
            ]),
            urgency: Urgency::Low,
            label: "Cold / Upper Respiratory Infection".into(),
            causes: "Common cold (rhinovirus – 200+ strains), seasonal flu (influenza), \
                     COVID-19, allergic rhinitis (dust/pollen), or sinus infection"
                .into(),
            mechanism: "Viruses attach to the cells lining your nose and throat, triggering inflammation. \
                        Your body produces mucus to trap the virus and sends more blood to the area \
                        (causing the stuffy feeling). Sneezing and coughing are reflexes to expel the invaders."
                .into(),
            advice: "1. Steam inhalation 3 times a day: boil water, add 2 drops eucalyptus oil, inhale with towel over head for 10 min.\n\
                     2. Gargle with warm salt water morning and night for sore throat.\n\
                     3. Drink warm haldi-doodh (turmeric milk) or ginger-honey tea before bed.\n\
                     4. Take Cetirizine 10 mg at night if there's a lot of sneezing/runny nose.\n\
                     5. Rest well, wash hands often, and wear a mask around others."
                .into(),
            home_remedies: "Kadha: boil tulsi leaves, ginger, black pepper, and cloves in water – sip warm. \
                            Honey (1 tsp) before bed reduces nighttime cough. \
                            Nasal saline drops (salt water) clear congestion without medicine."
                .into(),
            red_flags: "Difficulty breathing or chest tightness, high fever >3 days, blood in \
                        sputum, severe headache with stiff neck"
                .into(),
            timeline: "Common cold: 5-7 days. Flu: 7-10 days. Cough may linger 2-3 weeks. See a \
                       doctor if not improving by day 5."
                .into(),
        },
        ConditionRecord {
            key: "skin".into(),
            keywords: phrases(&[
                "rash", "itching", "skin", "allergy", "hives", "swelling",
                "red spots", "bumps", "pimple", "boil", "eczema", "fungal",
            ]),
            urgency: Urgency::Low,
            label: "Skin / Allergy Issue".into(),
            causes: "Allergic reaction (food, detergent, pollen), fungal infection (ringworm, athlete's foot), \
                     eczema (dry inflamed skin), insect bites, or heat rash (prickly heat)"
                .into(),
            mechanism: "When skin contacts an allergen, immune cells release histamine. \
                        Histamine widens blood vessels (redness), leaks fluid into tissue (swelling), \
                        and stimulates itch nerves. Fungal infections thrive in warm moist skin folds."
                .into(),
            advice: "1. Take Cetirizine 10 mg at night to reduce itching and swelling.\n\
                     2. Apply calamine lotion on itchy areas for soothing relief.\n\
                     3. For fungal patches: apply Clotrimazole cream twice daily for 2 weeks, keep area dry.\n\
                     4. Wear loose cotton clothes, avoid scratching (trim nails short).\n\
                     5. If rash spreads rapidly, face/throat swells, or breathing becomes difficult – this is anaphylaxis, rush to hospital."
                .into(),
            home_remedies: "Neem paste applied to ringworm patches has antifungal properties. \
                            Coconut oil soothes dry eczema skin. \
                            A cold oatmeal bath relieves widespread itching."
                .into(),
            red_flags: "Rapid swelling of face/lips/tongue, difficulty breathing (anaphylaxis), \
                        fever with widespread rash, blisters/peeling skin"
                .into(),
            timeline: "Allergic rash: clears in 2-5 days with antihistamines. Fungal infection: \
                       needs 2-4 weeks of consistent cream application."
                .into(),
        },
        ConditionRecord {
            key: "injury".into(),
            keywords: phrases(&[
                "cut", "wound", "bleeding", "fracture", "broken", "sprain",
                "fall", "accident", "hit", "injury", "bruise", "burn",
            ]),
            urgency: Urgency::Medium,
            label: "Injury / Wound".into(),
            causes: "Physical trauma from a fall, accident, or impact. \
                     Could result in soft tissue injury (bruise/sprain), laceration (cut), \
                     fracture (broken bone), or burn (thermal/chemical)"
                .into(),
            mechanism: "When tissue is damaged, blood vessels break causing bleeding and bruising. \
                        Your body sends inflammatory cells and fluid to the area (swelling) to begin repair. \
                        A fracture means the bone has cracked or broken – you'll feel intense pain with movement."
                .into(),
            advice: "1. For bleeding: press a clean cloth firmly on the wound for 10 minutes without lifting.\n\
                     2. For sprains: RICE method – Rest, Ice (15 min on/off), Compress with bandage, Elevate the limb.\n\
                     3. For burns: run cool (not ice-cold) water over the burn for 10 minutes, cover loosely.\n\
                     4. Take Paracetamol 500 mg for pain. Do NOT apply ointments/toothpaste on burns.\n\
                     5. If bone looks deformed, you can't move the limb, or bleeding doesn't stop – go to hospital immediately."
                .into(),
            home_remedies: "Turmeric-coconut oil paste on minor cuts is antiseptic. \
                            Aloe vera gel on minor burns cools and helps healing. \
                            Cold compress (ice in cloth) for the first 48 hours of a sprain."
                .into(),
            red_flags: "Bone visibly deformed or poking through skin, bleeding won't stop after \
                        15 min of pressure, head injury with confusion/vomiting, deep wound needing stitches"
                .into(),
            timeline: "Bruises: 1-2 weeks. Sprains: 2-6 weeks. Fractures: 4-8 weeks in cast. \
                       Cuts: 5-10 days to heal."
                .into(),
        },
        ConditionRecord {
            key: "eye".into(),
            keywords: phrases(&[
                "eye", "vision", "blurry", "red eye", "eye pain", "watery eyes",
                "eye swelling", "conjunctivitis", "itchy eye",
            ]),
            urgency: Urgency::Medium,
            label: "Eye Problem".into(),
            causes: "Conjunctivitis (viral/bacterial eye infection), allergic eye irritation, \
                     eye strain from screens, foreign body in eye, or stye (eyelid infection)"
                .into(),
            mechanism: "The conjunctiva (thin membrane covering the eye) becomes inflamed when infected or irritated. \
                        Blood vessels dilate (redness), the eye produces excess tears or discharge to flush out the irritant."
                .into(),
            advice: "1. Wash hands before touching eyes. Use clean cotton soaked in cooled boiled water to gently clean discharge.\n\
                     2. For infection: use antibiotic eye drops (Ciprofloxacin drops) 4 times a day for 5 days.\n\
                     3. For allergy: cold compress on closed eyes + antiallergy drops (Olopatadine).\n\
                     4. Do NOT rub eyes, share towels, or wear contact lenses until healed.\n\
                     5. If vision becomes blurry, eye is very painful, or light causes severe pain – see an eye doctor ASAP."
                .into(),
            home_remedies: "Rose water drops soothe mild eye irritation. \
                            Cold cucumber slices on closed eyes reduce puffiness and redness. \
                            Washing eyes with clean, cooled boiled water 3 times a day helps with discharge."
                .into(),
            red_flags: "Sudden vision loss, severe eye pain, something stuck in eye you can't \
                        remove, eye injury with blood inside eye"
                .into(),
            timeline: "Viral conjunctivitis: 5-7 days. Bacterial: improves in 2-3 days with \
                       drops. Eye strain: resolves with rest."
                .into(),
        },
        ConditionRecord {
            key: "urinary".into(),
            keywords: phrases(&[
                "urine", "burning urine", "frequent urination", "uti", "urinary",
                "pee", "kidney", "back pain lower",
            ]),
            urgency: Urgency::Medium,
            label: "Urinary Issue".into(),
            causes: "Urinary tract infection (UTI – bacteria from outside enter the urethra), \
                     kidney stones (mineral deposits blocking urine flow), \
                     dehydration causing concentrated dark urine"
                .into(),
            mechanism: "Bacteria (usually E. coli from the gut) travel up the urethra and infect the bladder lining. \
                        This causes inflammation, making the bladder feel full even when it's not – \
                        hence the burning sensation and urge to urinate frequently."
                .into(),
            advice: "1. Drink 3-4 litres of water today to flush bacteria out.\n\
                     2. Do NOT hold urine – empty your bladder fully every time.\n\
                     3. Common UTI treatment: Nitrofurantoin 100 mg twice daily for 5 days (needs doctor prescription).\n\
                     4. Cranberry juice (unsweetened) may help prevent bacteria from sticking to bladder walls.\n\
                     5. If you have back pain, fever, blood in urine, or vomiting – this may be a kidney infection, see a doctor today."
                .into(),
            home_remedies: "Barley water (jau ka pani): boil barley in water, strain, sip throughout the day – soothes the urinary tract. \
                            Coriander seed water has cooling properties. \
                            Coconut water is a natural diuretic that helps flush the system."
                .into(),
            red_flags: "Fever with back/flank pain (kidney infection), blood in urine, severe \
                        pain that comes in waves (kidney stone), unable to urinate at all"
                .into(),
            timeline: "UTI with antibiotic: symptoms improve in 24-48 hours. Kidney stones: may \
                       pass in 1-3 days (drink lots of water). See doctor if pain is severe."
                .into(),
        },
        ConditionRecord {
            key: "anxiety".into(),
            keywords: phrases(&[
                "anxiety", "panic", "anxious", "panic attack", "nervous",
                "worried", "stress", "can't sleep", "insomnia", "palpitation",
            ]),
            urgency: Urgency::Low,
            label: "Anxiety / Stress".into(),
            causes: "Generalized anxiety disorder, panic disorder, acute stress reaction, \
                     sleep deprivation, excessive caffeine, or an underlying physical condition \
                     (thyroid, anaemia) mimicking anxiety"
                .into(),
            mechanism: "Your brain's amygdala (threat detector) fires a false alarm, flooding your body with \
                        adrenaline and cortisol. Heart races, muscles tense, breathing speeds up, stomach churns – \
                        this is the fight-or-flight response activating when there's no real danger."
                .into(),
            advice: "1. Box breathing: breathe IN 4 sec → HOLD 4 sec → OUT 4 sec → HOLD 4 sec. Repeat 5 times.\n\
                     2. Grounding exercise: name 5 things you see, 4 you touch, 3 you hear, 2 you smell, 1 you taste.\n\
                     3. Walk outside for 15-20 minutes – movement burns off stress hormones.\n\
                     4. Limit tea/coffee to 2 cups before noon. No screens 1 hour before bed.\n\
                     5. If panic attacks happen frequently or you have thoughts of self-harm, speak to a counsellor (iCall helpline: 9152987821)."
                .into(),
            home_remedies: "Warm chamomile or ashwagandha tea before bed promotes calm. \
                            Lavender oil on pillow helps with sleep. \
                            15 minutes of slow pranayama (deep yogic breathing) daily reduces baseline anxiety."
                .into(),
            red_flags: "Thoughts of self-harm or suicide (call KIRAN helpline: 1800-599-0019), \
                        chest pain (rule out heart problem), fainting spells"
                .into(),
            timeline: "Panic attacks peak in 10 minutes and pass in 20-30 minutes. Chronic \
                       anxiety: improves over 4-6 weeks with regular breathing exercises, \
                       lifestyle changes, or therapy."
                .into(),
        },
        ConditionRecord {
            key: "back_pain".into(),
            keywords: phrases(&[
                "back pain", "lower back", "spine", "backache", "slipped disc",
                "sciatica", "back hurting",
            ]),
            urgency: Urgency::Low,
            label: "Back Pain".into(),
            causes: "Muscle strain (heavy lifting, poor posture), lumbar spondylosis (wear and tear of spine), \
                     slipped disc (disc pressing on nerve), or kidney problem (if pain is on one side with fever)"
                .into(),
            mechanism: "Most back pain is muscular: overuse or sudden twisting tears small muscle fibres, \
                        causing inflammation and spasm. A slipped disc means the soft cushion between vertebrae \
                        bulges out and presses on nearby nerves, causing pain that may shoot down the leg (sciatica)."
                .into(),
            advice: "1. Stay gently active – complete bed rest makes it worse. Walk slowly for 10 min every 2 hours.\n\
                     2. Apply a hot water bag to the sore area for 15-20 minutes, 3 times a day.\n\
                     3. Take Ibuprofen 400 mg with food every 8 hours for pain and inflammation.\n\
                     4. Sleep on your side with a pillow between the knees to reduce spine strain.\n\
                     5. If pain shoots down the leg, you feel numbness/tingling, or have trouble controlling urine – see a doctor urgently."
                .into(),
            home_remedies: "Warm mustard oil massage along the spine improves blood flow. \
                            A pinch of turmeric in warm milk before bed reduces inflammation. \
                            Cat-cow stretch (on hands and knees, arch and round the back slowly) done 10 times twice daily eases stiffness."
                .into(),
            red_flags: "Pain shooting down the leg with numbness (sciatica), loss of bladder/bowel \
                        control, fever with back pain (spinal infection), pain after serious fall/accident"
                .into(),
            timeline: "Muscle strain: improves in 3-7 days. Disc-related: 4-6 weeks. If no \
                       improvement in 2 weeks, get an X-ray/MRI."
                .into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(builtin_conditions().len(), 13);
    }

    #[test]
    fn test_keys_unique() {
        let conditions = builtin_conditions();
        let mut keys: Vec<&str> = conditions.iter().map(|c| c.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), conditions.len());
    }

    #[test]
    fn test_keywords_are_lowercase_phrases() {
        for condition in builtin_conditions() {
            for keyword in &condition.keywords {
                assert!(
                    keyword.chars().all(|c| {
                        c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ' || c == '\''
                    }),
                    "keyword {:?} of {:?} is not a lowercase phrase",
                    keyword,
                    condition.key
                );
            }
        }
    }

    #[test]
    fn test_only_chest_pain_is_high_urgency() {
        let conditions = builtin_conditions();
        let high: Vec<&str> = conditions
            .iter()
            .filter(|c| c.urgency == Urgency::High)
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(high, vec!["chest_pain"]);
    }

    #[test]
    fn test_advisory_fields_populated() {
        for condition in builtin_conditions() {
            assert!(!condition.label.is_empty(), "{} label", condition.key);
            assert!(!condition.causes.is_empty(), "{} causes", condition.key);
            assert!(!condition.mechanism.is_empty(), "{} mechanism", condition.key);
            assert!(!condition.advice.is_empty(), "{} advice", condition.key);
            assert!(
                !condition.home_remedies.is_empty(),
                "{} home_remedies",
                condition.key
            );
            assert!(!condition.red_flags.is_empty(), "{} red_flags", condition.key);
            assert!(!condition.timeline.is_empty(), "{} timeline", condition.key);
        }
    }
}
